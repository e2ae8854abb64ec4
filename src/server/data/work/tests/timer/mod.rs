mod create_active;
mod delete_by_account;
mod find_active;

use tally_test_utils::prelude::*;

use crate::server::data::work::timer::TimerRepository;
