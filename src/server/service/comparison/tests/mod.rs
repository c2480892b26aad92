use slugger_test_utils::prelude::*;

use crate::server::{
    error::{player::PlayerError, Error},
    service::comparison::{compare_metrics, ComparisonService},
    stats::StatLine,
};
