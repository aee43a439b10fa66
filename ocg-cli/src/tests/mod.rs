mod show_test;

use rstest::*;

use super::*;
