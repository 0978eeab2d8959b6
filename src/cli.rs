use crate::config::DataDirs;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MEMBERS_EXPORT: &str = "backup_cliente_20231129.csv";
pub const DEFAULT_LEDGER_EXPORT: &str = "backup_granatum_20231129.csv";

#[derive(Parser, Debug)]
#[command(name = "tesouraria", version, about = "Monthly boleto billing for the NSJB treasury")]
pub struct Cli {
    #[command(flatten)]
    pub dirs: DirArgs,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct DirArgs {
    #[arg(long, global = true, default_value = "../update", help = "Directory of Granatum ledger exports")]
    pub update_dir: PathBuf,
    #[arg(long, global = true, default_value = "../socios", help = "Directory of member exports and the roster snapshot")]
    pub socios_dir: PathBuf,
    #[arg(long, global = true, default_value = "../boletos", help = "Directory for processor import files")]
    pub boletos_dir: PathBuf,
}

impl From<DirArgs> for DataDirs {
    fn from(args: DirArgs) -> Self {
        DataDirs {
            update_dir: args.update_dir,
            socios_dir: args.socios_dir,
            boletos_dir: args.boletos_dir,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rebuild the roster snapshot from the member export.
    Socios {
        #[arg(long, default_value = DEFAULT_MEMBERS_EXPORT)]
        input: String,
    },
    /// Write the processor's boleto import spreadsheet.
    Boletos {
        #[arg(long, default_value = DEFAULT_LEDGER_EXPORT)]
        input: String,
    },
    /// Mail each member their monthly statement.
    Lembretes {
        #[arg(long, default_value = DEFAULT_LEDGER_EXPORT)]
        input: String,
        #[arg(long, help = "Only mail the member with this exact name")]
        only: Option<String>,
        #[arg(long, help = "Also save every rendered email as teste_<name>.html in this directory")]
        preview_dir: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Render and log without sending")]
        dry_run: bool,
        #[arg(long, help = "Send every email to this address instead")]
        recipient: Option<String>,
    },
}
