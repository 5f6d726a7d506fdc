use super::{cli_manager::logging_level_cli_arg, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crustaspic::{
    aa::{self, Argument, Query},
    io::{AspartixReader, AspartixWriter, InstanceReader, ResponseWriter},
    solvers::{self, CredulousAcceptanceComputer, SkepticalAcceptanceComputer},
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("output a certificate for DC/DS queries when one exists")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let mut reader = AspartixReader::default();
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let af = common::read_file_path(file, &mut reader)?;
        let (query, semantics) = aa::read_problem_string(arg_matches.value_of(common::ARG_PROBLEM).unwrap())?;
        let arg = arg_matches
            .value_of(common::ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        check_arg_definition(query, &arg)?;
        info!("solving {}-{}", query.to_short_str(), semantics.as_ref());
        let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
        let mut out = std::io::stdout();
        let writer = AspartixWriter::default();
        match query {
            Query::EE => {
                let extensions = solvers::extensions(&af, semantics)?;
                info!("found {} extension(s)", extensions.len());
                writer.write_extensions(&mut out, &extensions)
            }
            Query::CE => {
                let count = solvers::extensions(&af, semantics)?.len();
                ResponseWriter::<String>::write_extension_count(&writer, &mut out, count)
            }
            Query::SE => match solvers::new_solver(&af, semantics).compute_one_extension()? {
                Some(ext) => writer.write_single_extension(&mut out, &ext),
                None => ResponseWriter::<String>::write_no_extension(&writer, &mut out),
            },
            Query::DC | Query::DS => {
                let a = arg.ok_or_else(|| missing_argument(query))?;
                let mut solver = solvers::new_solver(&af, semantics);
                let (status, certificate) = if query == Query::DC {
                    solver.is_credulously_accepted_with_certificate(a)?
                } else {
                    solver.is_skeptically_accepted_with_certificate(a)?
                };
                let certificate = certificate.filter(|_| with_certificate);
                writer.write_acceptance_status(&mut out, status, certificate.as_deref())
            }
        }
    }
}

fn missing_argument(query: Query) -> anyhow::Error {
    anyhow!(
        "missing argument on the command line (required for query {})",
        query.to_short_str()
    )
}

fn check_arg_definition(query: Query, arg: &Option<&Argument<String>>) -> Result<()> {
    match (query.requires_argument(), arg) {
        (true, None) => Err(missing_argument(query)),
        (false, Some(_)) => {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                query.to_short_str()
            );
            Ok(())
        }
        _ => Ok(()),
    }
}
