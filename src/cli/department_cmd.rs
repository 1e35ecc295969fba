use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum DepartmentCmd {
    #[command(about = "Create a new department")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },
    #[command(about = "List all departments")]
    List,
    #[command(about = "Show one department by id")]
    Show {
        #[arg(long)]
        id: i64,
    },
    #[command(about = "Find a department by exact name")]
    Find {
        #[arg(long)]
        name: String,
    },
    #[command(about = "Change fields of an existing department")]
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    #[command(about = "Delete a department")]
    Delete {
        #[arg(long)]
        id: i64,
    },
    #[command(about = "List the employees of a department")]
    Employees {
        #[arg(long)]
        id: i64,
    },
}
