use clap::{Args, ValueEnum};
use jiff::civil::Date;
use lufei_app::domain::{
    coupons::{CouponsService, PgCouponsService, data::NewCoupon, records::CouponType},
    courses::records::CourseId,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CouponTypeArg {
    General,
    Threshold,
    PercentOff,
}

impl From<CouponTypeArg> for CouponType {
    fn from(arg: CouponTypeArg) -> Self {
        match arg {
            CouponTypeArg::General => Self::General,
            CouponTypeArg::Threshold => Self::Threshold,
            CouponTypeArg::PercentOff => Self::PercentOff,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CreateCouponArgs {
    /// Coupon display name
    #[arg(long)]
    name: String,

    #[arg(long = "type", value_enum)]
    coupon_type: CouponTypeArg,

    /// Amount taken off, in minor units
    #[arg(long, default_value_t = 0)]
    value: u64,

    /// Percentage still payable, for percent-off coupons
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    off_percent: Option<u8>,

    /// Minimum spend, in minor units
    #[arg(long, default_value_t = 0)]
    minimum_consume: u64,

    /// First valid day, `YYYY-MM-DD`
    #[arg(long)]
    valid_from: Date,

    /// Last valid day, `YYYY-MM-DD`
    #[arg(long)]
    valid_until: Date,

    /// Restrict the coupon to one course; global when omitted
    #[arg(long)]
    course_id: Option<i64>,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateCouponArgs) -> Result<(), String> {
    let coupon_type = CouponType::from(args.coupon_type);

    if coupon_type == CouponType::PercentOff && args.off_percent.is_none() {
        return Err("--off-percent is required for percent-off coupons".to_string());
    }

    let service = PgCouponsService::new(args.database.connect().await?);

    let coupon = service
        .create_coupon(NewCoupon {
            name: args.name,
            coupon_type,
            money_equivalent_value: args.value,
            off_percent: args.off_percent,
            minimum_consume: args.minimum_consume,
            valid_begin_date: args.valid_from,
            valid_end_date: args.valid_until,
            course_id: args.course_id.map(CourseId::from_i64),
        })
        .await
        .map_err(|error| format!("failed to create coupon: {error}"))?;

    println!("coupon_id: {}", coupon.id);
    println!("coupon_type: {}", coupon.coupon_type.label());

    match coupon.course_id {
        Some(course) => println!("course_id: {course}"),
        None => println!("course_id: (global)"),
    }

    Ok(())
}
