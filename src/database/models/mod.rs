pub mod bill;
pub mod paid_bill;
pub mod user;

pub use bill::{Bill, NewBill};
pub use paid_bill::{NewPaidBill, PaidBill, PaidBillChanges, PaidSummary};
pub use user::{NewUser, UserRecord};
