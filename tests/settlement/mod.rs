//! Tests for order tracking against the mock backend.

mod checkout;
mod tracking;

use portal_test_utils::prelude::*;
use skyline_portal::{model::order::OrderStatus, settlement::PollOutcome};

use crate::util::{notification_messages, TestSetupExt};
