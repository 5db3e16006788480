use std::fs;

use backoffice::{
    cities::PAKISTAN_CITIES,
    config::Config,
    dialogs::{self, ClientRecord},
    Action, ActionLog, ApprovalStatus, CreateEmployeeDialog, Dialog, EditClientDialog,
    VoucherFilterDrawer,
};
use color_eyre::{
    eyre::{bail, eyre, WrapErr},
    Result,
};
use form::{FormValues, SubmitEvent};
use indexmap::IndexMap;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::cli::{ClientCmd, Cli, Cmd, EmployeeCmd, FieldArgs, VoucherCmd};

/// Runs one CLI command against the matching dialog and prints the result.
pub struct App {
    config: Config,
    log: ActionLog,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            log: ActionLog::new(),
        }
    }

    pub fn run(&mut self, cli: Cli) -> Result<()> {
        self.execute(cli.cmd)?;
        self.print_actions()
    }

    /// Drive the dialog for `cmd`; dispatched actions stay in the log.
    pub fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Employee {
                cmd: EmployeeCmd::Create(fields),
            } => self.create_employee(&fields)?,
            Cmd::Client {
                cmd: ClientCmd::Edit { id, role, fields },
            } => self.edit_client(id, role, &fields)?,
            Cmd::Vouchers {
                cmd: VoucherCmd::Filter { approvals },
            } => {
                let mut drawer = VoucherFilterDrawer::with_overrides(
                    self.config.overrides(dialogs::voucher_filter::FORM_ID),
                )?;
                drawer.open();
                drawer.set_filtered(true);
                drawer.select(approvals);
                fill_and_leave(&mut drawer, FormValues::new());
                if !drawer.apply(&mut self.log, &mut SubmitEvent::new()) {
                    return Err(report_errors(&drawer));
                }
            }
            Cmd::Vouchers {
                cmd: VoucherCmd::Statuses,
            } => {
                for status in ApprovalStatus::iter() {
                    println!("{:<14} {}", status.to_string(), status.label());
                }
            }
            Cmd::Cities => {
                for city in PAKISTAN_CITIES {
                    println!("{city}");
                }
            }
        }
        Ok(())
    }

    fn create_employee(&mut self, fields: &FieldArgs) -> Result<()> {
        let mut dialog = CreateEmployeeDialog::with_overrides(
            self.config.overrides(dialogs::create_employee::FORM_ID),
        )?;
        dialog.open();
        let mut values = read_values(fields)?;
        values.extend(fields.set.iter().cloned());
        fill_and_leave(&mut dialog, values);

        if !dialog.submit(&mut self.log, &mut SubmitEvent::new()) {
            return Err(report_errors(&dialog));
        }
        Ok(())
    }

    fn edit_client(
        &mut self,
        id: Option<String>,
        role: Option<String>,
        fields: &FieldArgs,
    ) -> Result<()> {
        let mut record = match &fields.from {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading {}", path.display()))?;
                json5::from_str::<ClientRecord>(&raw)
                    .wrap_err_with(|| format!("parsing client record {}", path.display()))?
            }
            None => ClientRecord::default(),
        };
        if let Some(id) = id {
            record.id = id;
        }
        if role.is_some() {
            record.role = role;
        }
        if record.id.is_empty() {
            bail!("a client id is required (--id or `_id` in --from)");
        }

        let mut dialog = EditClientDialog::with_overrides(
            self.config.overrides(dialogs::edit_client::FORM_ID),
        )?;
        dialog.open(record);
        let edits: FormValues = fields.set.iter().cloned().collect();
        fill_and_leave(&mut dialog, edits);

        if !dialog.submit(&mut self.log, &mut SubmitEvent::new()) {
            return Err(report_errors(&dialog));
        }
        Ok(())
    }

    fn print_actions(&mut self) -> Result<()> {
        for action in self.log.drain() {
            info!(%action, "printing dispatched action");
            println!("{}", serde_json::to_string_pretty(&action)?);
        }
        Ok(())
    }

    pub fn actions(&self) -> &[Action] {
        self.log.actions()
    }
}

/// Initial values from `--from`, if given. Numbers and booleans are taken
/// as their text, `null` as an empty field.
fn read_values(fields: &FieldArgs) -> Result<FormValues> {
    let Some(path) = &fields.from else {
        return Ok(FormValues::new());
    };
    let raw =
        fs::read_to_string(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    let parsed: IndexMap<String, Value> = json5::from_str(&raw)
        .wrap_err_with(|| format!("parsing field values {}", path.display()))?;

    let mut values = FormValues::new();
    for (name, value) in parsed {
        let text = match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            Value::Bool(_) | Value::Number(_) => value.to_string(),
            Value::Array(_) | Value::Object(_) => {
                bail!("field `{name}` in {} must be a scalar value", path.display())
            }
        };
        values.insert(name, text);
    }
    Ok(values)
}

/// Type each value into its field, then leave every declared field so all
/// messages become visible after the submit.
fn fill_and_leave<D: Dialog>(dialog: &mut D, values: FormValues) {
    for (name, value) in values {
        debug!(field = %name, "set");
        let event = dialog.form().field_props(&name).change(value);
        dialog.form_mut().dispatch(event);
    }
    for field in dialog.fields() {
        let event = dialog.form().field_props(field.name).blur();
        dialog.form_mut().dispatch(event);
    }
}

/// Print the dialog as filled in, with the visible field errors, and build
/// the failure report.
fn report_errors<D: Dialog>(dialog: &D) -> color_eyre::Report {
    eprintln!("{}:", dialog.title());
    let mut failed = 0;
    for (field, props) in dialog.fields().iter().zip(dialog.field_props()) {
        let shown = field.display(&props.value);
        if props.error {
            failed += 1;
            eprintln!("  {:<12} {:<20} {}", field.label, shown, props.helper_text);
        } else {
            eprintln!("  {:<12} {}", field.label, shown);
        }
    }
    eyre!("{failed} field(s) failed validation")
}
