//! Route templates for span names and metric labels.

/// Collapse numeric path segments so per-id URLs share one label,
/// e.g. `/courses/42` becomes `/courses/{id}`.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_share_a_template() {
        assert_eq!(route_template("/shopping_car/"), "/shopping_car");
        assert_eq!(route_template("/shopping_car"), "/shopping_car");
        assert_eq!(route_template("/"), "/");
    }

    #[test]
    fn numeric_segments_are_collapsed() {
        assert_eq!(route_template("/courses/42/policies"), "/courses/{id}/policies");
    }
}
