use crate::{data::command_count::CommandCountRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod increment;
