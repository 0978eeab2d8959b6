use crate::config::BillingPolicy;
use crate::db::{load_roster, Database};
use crate::errors::PipelineError;
use crate::mailings::{preview_path, send_reminders, ReminderOptions};
use crate::pipeline::{build_billing_table, generate_roster_snapshot};
use crate::spreadsheets::{assemble_batches, export_processor_file};
use crate::tests::utils::*;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tempfile::TempDir;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Member export + snapshot for JOAO, ANA, BEATRIZ; JOAO's CEP went through a float column.
fn seeded_snapshot(dir: &Path) -> Database {
    let members = write_latin1(
        dir,
        "backup_cliente.csv",
        &[
            MEMBERS_HEADER.to_string(),
            member_line("JOAO DA SILVA", "joao@x.com", "7613800.0"),
            member_line("ANA CONCEIÇÃO", "ana@x.com", "07613-800"),
            member_line("BEATRIZ DA ROSA", "bia@x.com", "07613-801"),
        ],
    );
    let snapshot = Database::new(dir.join("lista_de_socios.sqlite3"));
    generate_roster_snapshot(&members, &snapshot).expect("roster snapshot");
    snapshot
}

fn ledger(dir: &Path) -> std::path::PathBuf {
    write_latin1(
        dir,
        "backup_granatum.csv",
        &[
            LEDGER_HEADER.to_string(),
            ledger_line("JOAO DA SILVA", "Boleto ProsperarBank", "005 - Tx Boleto", "10,00", "05/12/2023", "Tx Boleto"),
            ledger_line("JOAO DA SILVA", "Boleto ProsperarBank", "001 - Mensalidade", "80,00", "20/12/2023", "Mensalidade dezembro"),
            ledger_line("JOAO DA SILVA", "Dinheiro", "001 - Mensalidade", "80,00", "05/12/2023", "Pago em espécie"),
            ledger_line("ANA CONCEIÇÃO", "Boleto - Granatum Pagamentos", "001 - Mensalidade", "1.080,50", "01/12/2023", "Mensalidade + fundo de obras"),
            ledger_line("BEATRIZ DA ROSA", "Boleto ProsperarBank", "001 - Mensalidade", "80,00", "05/12/2023", "Mensalidade dezembro"),
            ledger_line("GRANATUM LTDA - EPP", "Boleto ProsperarBank", "009 - Sistema", "99,90", "05/12/2023", "Assinatura"),
            ledger_line("VISITANTE SEM CADASTRO", "Boleto ProsperarBank", "001 - Mensalidade", "80,00", "05/12/2023", "Contribuição"),
        ],
    )
}

#[test]
fn roster_snapshot_keeps_columns_and_order() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());

    let roster = load_roster(&snapshot).unwrap();
    let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["JOAO DA SILVA", "ANA CONCEIÇÃO", "BEATRIZ DA ROSA"]);

    let ana = &roster[1];
    assert_eq!(ana.email, "ana@x.com");
    assert_eq!(ana.district, "São Pedro");
    assert_eq!(ana.city, "Mairiporã");
    assert_eq!(ana.complement, "casa 2");
    assert!(ana.is_active());
}

#[test]
fn rerunning_the_roster_loader_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());
    let first = fs::read(snapshot.path()).unwrap();

    generate_roster_snapshot(&dir.path().join("backup_cliente.csv"), &snapshot).unwrap();
    let second = fs::read(snapshot.path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn member_export_without_required_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    let members = write_latin1(
        dir.path(),
        "backup_cliente.csv",
        &["Nome/Razão Social;Email".to_string(), "ANA;ana@x.com".to_string()],
    );

    let err = generate_roster_snapshot(&members, &Database::new(dir.path().join("s.sqlite3"))).unwrap_err();
    match err {
        PipelineError::FormatError(msg) => assert!(msg.contains("'CPF/CNPJ'")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn billing_table_needs_the_roster_snapshot() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger(dir.path());

    let err = build_billing_table(
        &ledger,
        &Database::new(dir.path().join("missing.sqlite3")),
        &BillingPolicy::default(),
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::JoinInputMissing(_)));
}

#[test]
fn billing_table_filters_normalizes_and_joins() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());

    let table = build_billing_table(&ledger(dir.path()), &snapshot, &BillingPolicy::default()).unwrap();

    // Cash, own organization and the unknown payer are gone.
    assert_eq!(table.lines.len(), 4);
    assert_eq!(table.report.rows_read, 7);
    assert_eq!(table.report.unrecognized_payment_method, 1);
    assert_eq!(table.report.own_organization, 1);
    assert_eq!(table.report.unmatched, vec![("VISITANTE SEM CADASTRO".to_string(), 1)]);

    assert!(table.lines.iter().all(|l| l.item.payment_method != "Dinheiro"));
    assert!(table.lines.iter().all(|l| l.item.due_date.to_string() == "10/12/2023"));

    let fee = &table.lines[0];
    assert_eq!(fee.item.category, "005 - Tx Boleto");
    assert_eq!(fee.item.amount, dec("4.50"));
    assert_eq!(fee.member.email, "joao@x.com");

    let ana = table.lines.iter().find(|l| l.member_name() == "ANA CONCEIÇÃO").unwrap();
    assert_eq!(ana.item.amount, dec("1080.50"));
    assert_eq!(ana.item.description, "Mensalidade + fundo de obras");
}

#[test]
fn processor_export_groups_numbers_and_excludes() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());
    let policy = BillingPolicy::default();
    let table = build_billing_table(&ledger(dir.path()), &snapshot, &policy).unwrap();

    let plan = assemble_batches(&table.lines, &policy);
    assert_eq!(plan.excluded, 1);
    assert_eq!(plan.batches.len(), 2);

    // Key order: ANA, BEATRIZ (excluded, 002), JOAO
    let ana = &plan.batches[0];
    assert_eq!(ana.payer_name, "ANA CONCEIÇÃO");
    assert_eq!(ana.external_id, "202312001");
    assert_eq!(ana.amount, dec("1080.50"));

    let joao = &plan.batches[1];
    assert_eq!(joao.payer_name, "JOAO DA SILVA");
    assert_eq!(joao.external_id, "202312003");
    assert_eq!(joao.amount, dec("84.50"));
    assert_eq!(joao.postal_code, "7613800");
    assert_eq!(joao.due_date.to_string(), "10/12/2023");

    let out = dir.path().join("boletos");
    fs::create_dir(&out).unwrap();
    let summary = export_processor_file(&table.lines, &out, &policy)
        .unwrap()
        .expect("file written");

    assert_eq!(summary.path, out.join("20231210_boletos_prosperar.xlsx"));
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.excluded, 1);
    assert!(fs::metadata(&summary.path).unwrap().len() > 0);
}

#[test]
fn processor_export_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());
    let policy = BillingPolicy::default();
    let table = build_billing_table(&ledger(dir.path()), &snapshot, &policy).unwrap();

    let err = export_processor_file(&table.lines, &dir.path().join("nope"), &policy).unwrap_err();
    assert!(matches!(err, PipelineError::ExportIoError(_)));
}

#[test]
fn reminders_continue_after_a_failed_send() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());
    let policy = BillingPolicy::default();
    let table = build_billing_table(&ledger(dir.path()), &snapshot, &policy).unwrap();

    let mailer = RecordingMailer {
        fail_for: vec!["joao@x.com".to_string()],
        ..RecordingMailer::default()
    };
    let summary = send_reminders(&table.lines, &policy, &mailer, &ReminderOptions::default()).unwrap();

    assert_eq!(summary.sent, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 0);

    let sent = mailer.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "ana@x.com");
    assert_eq!(sent[0].subject, "CEBUDV NSJB - Lembrete de Mensalidade: R$ 1080.50");
    assert!(sent[0].html.contains("Ana Conceição!"));
    assert!(sent[0].html.contains("1,080.50"));
}

#[test]
fn reminders_can_target_one_member_with_preview() {
    let dir = TempDir::new().unwrap();
    let snapshot = seeded_snapshot(dir.path());
    let policy = BillingPolicy::default();
    let table = build_billing_table(&ledger(dir.path()), &snapshot, &policy).unwrap();

    let previews = dir.path().join("previews");
    fs::create_dir(&previews).unwrap();
    let options = ReminderOptions {
        only: Some("JOAO DA SILVA".to_string()),
        preview_dir: Some(previews.clone()),
        recipient_override: Some("tesouraria@example.org".to_string()),
    };

    let mailer = RecordingMailer::default();
    let summary = send_reminders(&table.lines, &policy, &mailer, &options).unwrap();

    assert_eq!(summary.sent, 1);
    assert_eq!(summary.skipped, 1);

    let sent = mailer.sent.borrow();
    assert_eq!(sent[0].to, "tesouraria@example.org");
    assert_eq!(sent[0].subject, "CEBUDV NSJB - Lembrete de Mensalidade: R$ 84.50");

    let preview = fs::read_to_string(preview_path(&previews, "JOAO DA SILVA")).unwrap();
    assert_eq!(preview, sent[0].html);
    assert!(preview.contains("Joao Da Silva!"));
    assert!(preview.contains("Mensalidade dezembro"));
}
