//! Entities shared between the usage sources and the computation layer,
//! plus the [source::UsagePeriodSource] boundary that decouples the
//! dashboard from any particular data origin.

pub mod entities;
pub mod mock;
pub mod source;
