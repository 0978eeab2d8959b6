// src/config.rs
use crate::domain::DueDate;
use crate::errors::PipelineError;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

pub const SNAPSHOT_FILE: &str = "lista_de_socios.sqlite3";

/// Directory layout shared by the three subcommands.
#[derive(Debug, Clone)]
pub struct DataDirs {
    /// Granatum ledger exports (lançamentos).
    pub update_dir: PathBuf,
    /// Granatum member exports and the roster snapshot.
    pub socios_dir: PathBuf,
    /// Processor import files.
    pub boletos_dir: PathBuf,
}

impl DataDirs {
    pub fn snapshot_path(&self) -> PathBuf {
        self.socios_dir.join(SNAPSHOT_FILE)
    }
}

/// `<dir>/<YYYYMMDD>_boletos_prosperar.xlsx`
pub fn export_path_in(dir: &Path, due_date: &DueDate) -> PathBuf {
    dir.join(format!("{}_boletos_prosperar.xlsx", due_date.compact()))
}

/// SMTP settings, read once by the entry point and handed to the mailer.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender_email: String,
    pub sender_password: String,
    pub smtp_server: String,
    pub smtp_port: u16,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PipelineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| PipelineError::ConfigError(format!("{key} is not set")))
        };

        let port_raw = require("SMTP_PORT")?;
        let smtp_port = port_raw.trim().parse::<u16>().map_err(|e| {
            PipelineError::ConfigError(format!("SMTP_PORT '{port_raw}' is not a port: {e}"))
        })?;

        Ok(Self {
            sender_email: require("SENDER_EMAIL")?,
            sender_password: require("SENDER_PASS")?,
            smtp_server: require("SMTP_SERVER")?,
            smtp_port,
        })
    }
}

/// Business rules of the monthly billing run.
#[derive(Debug, Clone)]
pub struct BillingPolicy {
    pub payment_methods: Vec<String>,
    /// Counterparty name of the organization itself.
    pub own_organization: String,
    pub fee_category: String,
    pub fee_amount: Decimal,
    pub due_day: u32,
    /// Members never billed through the processor nor reminded by mail.
    pub excluded_members: Vec<String>,
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            payment_methods: vec![
                "Boleto - Granatum Pagamentos".to_string(),
                "Boleto ProsperarBank".to_string(),
            ],
            own_organization: "GRANATUM LTDA - EPP".to_string(),
            fee_category: "005 - Tx Boleto".to_string(),
            fee_amount: Decimal::new(450, 2),
            due_day: 10,
            excluded_members: vec!["BEATRIZ DA ROSA".to_string()],
        }
    }
}

impl BillingPolicy {
    pub fn accepts_payment_method(&self, method: &str) -> bool {
        self.payment_methods.iter().any(|m| m == method)
    }

    pub fn is_excluded(&self, member_name: &str) -> bool {
        self.excluded_members.iter().any(|m| m == member_name)
    }
}
