use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum SchemaCmd {
    #[command(about = "Create the tables if they are missing")]
    Create,
    #[command(
        about = "Drop both tables",
        long_about = "Drop the employees and departments tables if present. All stored records are lost."
    )]
    Drop,
}
