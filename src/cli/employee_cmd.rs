use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum EmployeeCmd {
    #[command(about = "Create a new employee")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, value_name = "TITLE")]
        job_title: String,
        #[arg(long, value_name = "ID")]
        department_id: Option<i64>,
    },
    #[command(about = "List employees, optionally only those of one department")]
    List {
        #[arg(long, value_name = "ID")]
        department_id: Option<i64>,
    },
    #[command(about = "Show one employee by id")]
    Show {
        #[arg(long)]
        id: i64,
    },
    #[command(
        about = "Find an employee by exact name",
        long_about = "Find an employee by exact name. Names are not unique; the first matching row is returned."
    )]
    Find {
        #[arg(long)]
        name: String,
    },
    #[command(about = "Change fields of an existing employee")]
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_name = "TITLE")]
        job_title: Option<String>,
        #[arg(long, value_name = "ID", conflicts_with = "clear_department")]
        department_id: Option<i64>,
        #[arg(long, default_value_t = false, help = "Unset the department reference")]
        clear_department: bool,
    },
    #[command(about = "Delete an employee")]
    Delete {
        #[arg(long)]
        id: i64,
    },
    #[command(about = "Show the department an employee belongs to")]
    Department {
        #[arg(long)]
        id: i64,
    },
}
