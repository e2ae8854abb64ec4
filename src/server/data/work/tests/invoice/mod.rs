
use tally_test_utils::prelude::*;

use crate::server::data::work::invoice::{InvoiceRepository, NewInvoice};
