// Test helpers and cases are exempt from the crate's documentation lints.
#![allow(clippy::missing_docs_in_private_items, clippy::pedantic)]

mod eventlog_test;
mod summary_test;

use rstest::*;

use crate::prelude::*;
