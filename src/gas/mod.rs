//! Gas accounting: the price table and the running meter.
//!
//! Pricing and metering are kept separate: [`price_table`] and
//! [`syscall_price`] are pure functions of opcode/operands, while
//! [`meter::GasMeter`] is the only stateful piece, mirroring how the engine
//! charges gas before ever consulting the limit checker.

mod meter;
mod price_table;
mod syscall_price;

pub use meter::GasMeter;
pub use price_table::price_of;
pub use syscall_price::syscall_price;
