mod time_utils;

pub use time_utils::{
    DATE_FORMAT, MS_IN_D, date_string_to_epoch_ms, epoch_ms_to_date_string, epoch_ms_to_days,
};
