use clap::Args;
use lufei_app::domain::courses::{
    CoursesService, PgCoursesService,
    data::{NewCourse, NewPricePolicy},
    records::ValidPeriod,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateCourseArgs {
    /// Course title
    #[arg(long)]
    name: String,

    /// Course image path or URL
    #[arg(long, default_value = "")]
    image: String,

    /// Price policy as `<days>:<price in minor units>`; repeatable
    #[arg(long = "price-policy", value_parser = parse_price_policy, required = true)]
    price_policies: Vec<NewPricePolicy>,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateCourseArgs) -> Result<(), String> {
    let service = PgCoursesService::new(args.database.connect().await?);

    let (course, policies) = service
        .create_course(NewCourse {
            name: args.name,
            course_img: args.image,
            price_policies: args.price_policies,
        })
        .await
        .map_err(|error| format!("failed to create course: {error}"))?;

    println!("course_id: {}", course.id);
    println!("course_name: {}", course.name);

    for policy in policies {
        println!(
            "price_policy_id: {} ({}, {})",
            policy.id, policy.valid_period, policy.price
        );
    }

    Ok(())
}

fn parse_price_policy(value: &str) -> Result<NewPricePolicy, String> {
    let (days, price) = value
        .split_once(':')
        .ok_or_else(|| format!("expected <days>:<price>, got `{value}`"))?;

    let days = days
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid period `{days}`: {error}"))?;

    let price = price
        .trim()
        .parse::<u64>()
        .map_err(|error| format!("invalid price `{price}`: {error}"))?;

    Ok(NewPricePolicy {
        valid_period: ValidPeriod::from_days(days),
        price,
    })
}
