use crate::errors::PipelineError;
use crate::mailings::MailTransport;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

pub const MEMBERS_HEADER: &str =
    "Código;Nome/Razão Social;CPF/CNPJ;Email;Telefone;Endereço;Número;Complemento;Bairro;Cidade;Estado;CEP;Ativo";

pub const LEDGER_HEADER: &str = "Data de competência;Data de vencimento;Descrição;Categoria;Valor;\
Cliente/Fornecedor;Documento cliente/fornecedor;Forma de pagamento;Conta";

/// Encodes `text` the way Granatum writes its exports.
pub fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("fixture text must be latin-1"))
        .collect()
}

pub fn write_latin1(dir: &Path, name: &str, lines: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(&path, latin1(&text)).expect("write fixture");
    path
}

pub fn member_line(name: &str, email: &str, cep: &str) -> String {
    format!("1;{name};111.222.333-44;{email};11 99999-0000;Rua das Palmeiras;120;casa 2;São Pedro;Mairiporã;SP;{cep};Sim")
}

pub fn ledger_line(payer: &str, method: &str, category: &str, amount: &str, due: &str, description: &str) -> String {
    format!("01/12/2023;{due};{description};{category};{amount};{payer};111.222.333-44;{method};Conta Corrente")
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Keeps every message instead of sending it. Addresses in `fail_for` error out.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: RefCell<Vec<SentEmail>>,
    pub fail_for: Vec<String>,
}

impl MailTransport for RecordingMailer {
    fn send_html(&self, to: &str, subject: &str, html: &str) -> Result<(), PipelineError> {
        if self.fail_for.iter().any(|f| f == to) {
            return Err(PipelineError::MailTransportError(format!(
                "535 authentication rejected for {to}"
            )));
        }
        self.sent.borrow_mut().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
