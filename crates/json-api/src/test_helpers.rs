//! Test helpers.

use std::sync::Arc;

use lufei_app::{
    context::AppContext,
    domain::{
        accounts::{MockAccountsService, records::AccountId},
        carts::MockCartsService,
        checkout::MockCheckoutService,
        coupons::MockCouponsService,
        courses::MockCoursesService,
    },
};
use salvo::{affix_state::inject, prelude::*};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ACCOUNT_ID: AccountId = AccountId::from_i64(1);

#[salvo::handler]
pub(crate) async fn inject_account(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_account_id(TEST_ACCOUNT_ID);
    ctrl.call_next(req, depot, res).await;
}

/// Mocks backing a test [`State`]. Unset mocks fail on any call.
#[derive(Default)]
pub(crate) struct TestMocks {
    pub(crate) accounts: MockAccountsService,
    pub(crate) carts: MockCartsService,
    pub(crate) checkout: MockCheckoutService,
}

impl TestMocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            accounts: Arc::new(self.accounts),
            courses: Arc::new(MockCoursesService::new()),
            coupons: Arc::new(MockCouponsService::new()),
            carts: Arc::new(self.carts),
            checkout: Arc::new(self.checkout),
        })
    }
}

pub(crate) fn auth_service(accounts: MockAccountsService, route: Router) -> Service {
    let state = TestMocks {
        accounts,
        ..TestMocks::default()
    }
    .into_state();

    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = TestMocks {
        carts,
        ..TestMocks::default()
    }
    .into_state();

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_account)
            .push(route),
    )
}

pub(crate) fn checkout_service(checkout: MockCheckoutService, route: Router) -> Service {
    let state = TestMocks {
        checkout,
        ..TestMocks::default()
    }
    .into_state();

    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_account)
            .push(route),
    )
}
