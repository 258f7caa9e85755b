use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use leavedesk::api::{ApiClient, LeaveClient};
use leavedesk::auth::AuthClient;
use leavedesk::model::{
    LeaveFilter, LeaveId, LeaveRequest, LeaveRequestInput, LeaveStatus, LeaveType, Role,
    StatusCounts,
};
use leavedesk::models::RegisterRequest;

#[derive(Parser, Debug)]
#[command(name = "leavedesk", version, about = "Submit, review and decide leave requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LEAVEDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in with it
    Register(RegisterArgs),
    /// Forget the stored session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Leave requests
    #[command(subcommand)]
    Leave(LeaveCommand),
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    full_name: String,
    #[arg(long)]
    employee_id: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "LEAVEDESK_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    #[arg(long)]
    job_title: String,
    #[arg(long)]
    department: String,
    /// staff, manager or hr_admin
    #[arg(long, default_value = "staff")]
    role: Role,
    #[arg(long)]
    accept_terms: bool,
}

#[derive(Subcommand, Debug)]
pub enum LeaveCommand {
    /// Submit a new leave request
    Apply {
        /// Annual, Sick, Personal, Maternity, Permission, "Compensatory Off", ...
        #[arg(long = "type")]
        leave_type: LeaveType,
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        /// Defaults to the inclusive span between --from and --to
        #[arg(long)]
        days: Option<u32>,
        #[arg(long)]
        reason: String,
        /// Someone else to keep informed; repeatable
        #[arg(long = "inform")]
        inform_to: Vec<String>,
    },
    /// Your own requests
    Mine(ListArgs),
    /// Everyone's requests (managers)
    All(ListArgs),
    /// Approve a pending request
    Approve { id: u64 },
    /// Reject a pending request
    Reject {
        id: u64,
        #[arg(long)]
        reason: String,
    },
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// pending, approved or rejected
    #[arg(long)]
    status: Option<LeaveStatus>,
    /// Only this leave type, e.g. Permission
    #[arg(long = "type")]
    leave_type: Option<LeaveType>,
    /// Matches employee, leave type or reason
    #[arg(long)]
    search: Option<String>,
}

impl ListArgs {
    fn filter(&self) -> LeaveFilter {
        LeaveFilter {
            status: self.status,
            leave_type: self.leave_type.clone(),
            search: self.search.clone(),
        }
    }
}

pub async fn run(command: Command, api: ApiClient) -> Result<()> {
    let auth = AuthClient::new(api.clone());
    let leaves = LeaveClient::new(api);

    match command {
        Command::Login { email, password } => {
            let session = auth.login(&email, &password).await.context("login failed")?;
            println!(
                "Logged in as {} ({})",
                display_name(&session.user.name, &session.user.email),
                session.user.role
            );
        }
        Command::Register(args) => {
            let profile = RegisterRequest {
                full_name: args.full_name,
                employee_id: args.employee_id,
                email: args.email,
                password: args.password,
                confirm_password: args.confirm_password,
                job_title: args.job_title,
                department: args.department,
                role: args.role,
                terms_accepted: args.accept_terms,
            };
            let session = auth
                .register(&profile)
                .await
                .context("registration failed")?;
            println!("Registered and logged in as {}", session.user.email);
        }
        Command::Logout => {
            auth.logout().context("could not clear the session")?;
            println!("Logged out");
        }
        Command::Whoami => match auth.current_user() {
            Some(user) => {
                println!("{}", display_name(&user.name, &user.email));
                println!("  id:    {}", user.id);
                println!("  role:  {}", user.role);
                if let Some(title) = user.job_title {
                    println!("  title: {title}");
                }
            }
            None => println!("Not logged in"),
        },
        Command::Leave(command) => run_leave(command, &leaves).await?,
    }

    Ok(())
}

async fn run_leave(command: LeaveCommand, leaves: &LeaveClient) -> Result<()> {
    match command {
        LeaveCommand::Apply {
            leave_type,
            from,
            to,
            days,
            reason,
            inform_to,
        } => {
            let number_of_days = match days {
                Some(days) => days,
                None => LeaveRequestInput::calendar_days(from, to),
            };
            let input = LeaveRequestInput {
                leave_type,
                from_date: from,
                to_date: to,
                number_of_days,
                reason,
                inform_to,
            };
            let created = leaves
                .create(&input)
                .await
                .context("could not submit leave request")?;
            println!("Submitted leave request #{} ({})", created.id, created.status);
        }
        LeaveCommand::Mine(args) => {
            let all = leaves
                .list_mine()
                .await
                .context("could not fetch your leave requests")?;
            print_leaves(&all, &args.filter());
        }
        LeaveCommand::All(args) => {
            let all = leaves
                .list_all()
                .await
                .context("could not fetch leave requests")?;
            print_leaves(&all, &args.filter());
        }
        LeaveCommand::Approve { id } => {
            let updated = leaves
                .approve(LeaveId(id))
                .await
                .with_context(|| format!("could not approve leave request #{id}"))?;
            println!("Leave request #{} is now {}", updated.id, updated.status);
        }
        LeaveCommand::Reject { id, reason } => {
            if reason.trim().is_empty() {
                bail!("a rejection needs a reason");
            }
            let updated = leaves
                .reject(LeaveId(id), &reason)
                .await
                .with_context(|| format!("could not reject leave request #{id}"))?;
            println!("Leave request #{} is now {}", updated.id, updated.status);
        }
    }

    Ok(())
}

fn display_name<'a>(name: &'a str, email: &'a str) -> &'a str {
    if name.is_empty() { email } else { name }
}

fn print_leaves(all: &[LeaveRequest], filter: &LeaveFilter) {
    let counts = StatusCounts::tally(all);
    println!(
        "pending: {}  approved: {}  rejected: {}",
        counts.pending, counts.approved, counts.rejected
    );

    let shown = filter.apply(all);
    if shown.is_empty() {
        println!("No leave requests");
        return;
    }

    for leave in shown {
        println!("{}", format_leave(leave));
    }
}

fn format_leave(leave: &LeaveRequest) -> String {
    let employee = leave
        .employee
        .as_ref()
        .map(|e| e.name.as_str())
        .unwrap_or("-");
    let kind = leave
        .leave_type
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());
    let dates = match (leave.from_date, leave.to_date) {
        (Some(from), Some(to)) => format!("{from} → {to}"),
        _ => "-".to_string(),
    };
    let days = leave
        .number_of_days
        .map(|d| format!("{d}d"))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "#{:<5} {:<9} {:<18} {:<16} {:<25} {:>4}  {}",
        leave.id.to_string(),
        leave.status.to_string(),
        employee,
        kind,
        dates,
        days,
        leave.reason
    )
}
