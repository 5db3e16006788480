// src/cli.rs
use std::path::PathBuf;

use backoffice::ApprovalStatus;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "backoffice", version, about = "Backoffice forms for employees, clients and refund vouchers")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Employee management
    Employee {
        #[command(subcommand)]
        cmd: EmployeeCmd,
    },
    /// Client management
    Client {
        #[command(subcommand)]
        cmd: ClientCmd,
    },
    /// Refund voucher authorizations
    Vouchers {
        #[command(subcommand)]
        cmd: VoucherCmd,
    },
    /// List the cities accepted for clients
    Cities,
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCmd {
    /// Fill in and submit the "Add New Employee" dialog
    Create(FieldArgs),
}

#[derive(Subcommand, Debug)]
pub enum ClientCmd {
    /// Load a client and submit the "Edit Client" dialog
    Edit {
        /// Client id (overrides `_id` from --from)
        #[arg(long)]
        id: Option<String>,
        /// Role forwarded with the update
        #[arg(long)]
        role: Option<String>,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum VoucherCmd {
    /// Apply the voucher filter drawer
    Filter {
        /// Approval status to filter by
        #[arg(long)]
        approvals: Option<ApprovalStatus>,
    },
    /// List the approval statuses the filter accepts
    Statuses,
}

/// Field input shared by the dialog commands.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Set a field, e.g. `--set firstName=Ada` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
    /// JSON5 file with initial field values
    #[arg(long = "from", value_name = "FILE")]
    pub from: Option<PathBuf>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("email=").unwrap(),
            ("email".to_string(), String::new())
        );
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("novalue").is_err());
    }

    #[test]
    fn employee_create_collects_fields() {
        let cli = Cli::try_parse_from([
            "backoffice",
            "employee",
            "create",
            "--set",
            "firstName=Ada",
            "--set",
            "lastName=Lovelace",
        ])
        .unwrap();
        match cli.cmd {
            Cmd::Employee {
                cmd: EmployeeCmd::Create(fields),
            } => assert_eq!(fields.set.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn voucher_filter_parses_status() {
        let cli =
            Cli::try_parse_from(["backoffice", "vouchers", "filter", "--approvals", "underProcess"])
                .unwrap();
        match cli.cmd {
            Cmd::Vouchers {
                cmd: VoucherCmd::Filter { approvals },
            } => assert_eq!(approvals, Some(ApprovalStatus::UnderProcess)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn voucher_statuses_takes_no_arguments() {
        let cli = Cli::try_parse_from(["backoffice", "vouchers", "statuses"]).unwrap();
        assert!(matches!(
            cli.cmd,
            Cmd::Vouchers {
                cmd: VoucherCmd::Statuses
            }
        ));
        assert!(Cli::try_parse_from(["backoffice", "vouchers", "statuses", "accepted"]).is_err());
    }
}
