//! App Router

use salvo::Router;

use crate::{auth, carts::handlers as cart, checkout::handlers as checkout, payment};

/// Login plus the token-protected cart, checkout and payment routes.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("auth").post(auth::login::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("shopping_car")
                        .get(cart::get::handler)
                        .post(cart::create::handler)
                        .put(cart::update::handler)
                        .delete(cart::delete::handler),
                )
                .push(
                    Router::with_path("accounts")
                        .get(checkout::get::handler)
                        .post(checkout::create::handler),
                )
                .push(Router::with_path("payment").post(payment::handler)),
        )
}
