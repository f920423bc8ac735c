use clap::Args;
use lufei_app::domain::{
    accounts::records::AccountId,
    coupons::{CouponsService, PgCouponsService, records::CouponId},
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct GrantCouponArgs {
    /// Account receiving the coupon
    #[arg(long)]
    account_id: i64,

    /// Coupon to hand out
    #[arg(long)]
    coupon_id: i64,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: GrantCouponArgs) -> Result<(), String> {
    let service = PgCouponsService::new(args.database.connect().await?);

    let grant = service
        .grant_coupon(
            AccountId::from_i64(args.account_id),
            CouponId::from_i64(args.coupon_id),
        )
        .await
        .map_err(|error| format!("failed to grant coupon: {error}"))?;

    println!("coupon_record_id: {}", grant.id);
    println!("account_id: {}", grant.account_id);
    println!("coupon_id: {}", grant.coupon_id);

    Ok(())
}
