mod app_helper;

mod authors_command;
use authors_command::AuthorsCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod problems_command;
use problems_command::ProblemsCommand;

mod solve_command;
use solve_command::SolveCommand;
