use crate::domain::text::title_case;
use crate::domain::ReminderEmail;
use crate::templates::components::{expenses_table, total_row};
use crate::templates::layouts::email_layout;
use maud::{html, Markup};

const ISSUER: &str = "CEBUDV NSJB";
const SIGNATURE: &str = "Tesouraria NSJB";
const LOGO_URL: &str =
    "https://udv.org.br/wp-content/uploads/2016/01/centro-espirita-beneficente-uniao-do-vegetal-300x164.png";
const CHECKOUT_URL: &str =
    "https://sales.prosperarbank.secure.srv.br/billet/checkout/58d5e823-0eeb-4a15-832f-11de57c2b901";
// TODO: take the checkout link and barcode from the processor's return file once it is imported.
const BARCODE: &str = "34191.09008 07085.650393 32500.060002 9 94690000059660";
const FOOTER_ADDRESS: &str = "Estrada João Mineiro, 3303 Bairro São Pedro, Mairiporã SP 07613-800";
const POWERED_BY_URL: &str = "https://i.pinimg.com/originals/82/6a/97/826a97bc3c85f06999008eafa4097c0a.gif";

/// Monthly reminder sent to one member.
pub fn reminder_page(email: &ReminderEmail) -> Markup {
    let content = html! {
        table role="presentation" border="0" cellpadding="0" cellspacing="0" style="background-color: #3498db;" {
            tr {
                td style="text-align: center;" {
                    img src=(LOGO_URL) alt="UDV" style="display: block; margin: 0 auto;";
                }
            }
        }
        br;
        table role="presentation" border="0" cellpadding="0" cellspacing="0" {
            tr {
                td {
                    p { "Olá, " b { (title_case(&email.member_name)) "!" } }
                    p {
                        "Este é um aviso automático de cobrança emitido por " b { (ISSUER) }
                        ", com vencimento em " (email.due_date.to_string())
                    }
                    (expenses_table(&email.lines))
                    (total_row(email.total()))
                    br;
                    p { "Fique de olho para não perder a data de vencimento!" }
                    table role="presentation" border="0" cellpadding="0" cellspacing="0" class="btn btn-primary" {
                        tbody {
                            tr {
                                td align="left" {
                                    table role="presentation" border="0" cellpadding="0" cellspacing="0" {
                                        tbody {
                                            tr {
                                                td { a href=(CHECKOUT_URL) target="_blank" { "Visualizar Boleto" } }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    br;
                    p { "Use este código de barras para pagamentos no bankline:" }
                    p class="barcode" { (BARCODE) }
                    br;
                    p { "Em caso de dúvidas entre em contato." }
                    br;
                    p { "Atenciosamente," }
                    p { b { (SIGNATURE) } }
                }
            }
        }
    };

    let footer = html! {
        table role="presentation" border="0" cellpadding="0" cellspacing="0" {
            tr {
                td class="content-block" {
                    span class="apple-link" { (FOOTER_ADDRESS) }
                }
            }
            tr {
                td class="content-block powered-by" {
                    "Powered by " a href=(POWERED_BY_URL) { "Senhor Barriga" } "."
                }
            }
        }
    };

    email_layout("Lembrete de Mensalidade", "Lembrete de Mensalidade", content, footer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DueDate, ReminderLine};
    use rust_decimal::Decimal;
    use scraper::{Html, Selector};
    use std::str::FromStr;

    fn email() -> ReminderEmail {
        ReminderEmail {
            member_name: "JOÃO DA SILVA".to_string(),
            recipient: "joao@x.com".to_string(),
            due_date: DueDate::parse("10/12/2023").unwrap(),
            lines: vec![
                ReminderLine {
                    description: "Mensalidade dezembro".to_string(),
                    amount: Decimal::from_str("1250").unwrap(),
                },
                ReminderLine {
                    description: "Tx Boleto <avulsa>".to_string(),
                    amount: Decimal::from_str("4.5").unwrap(),
                },
            ],
        }
    }

    fn texts(doc: &Html, css: &str) -> Vec<String> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    #[test]
    fn greets_member_by_title_cased_name_with_due_date() {
        let html = reminder_page(&email()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("João Da Silva!"));
        assert!(html.contains("com vencimento em 10/12/2023"));
    }

    #[test]
    fn table_lists_every_line_and_the_total() {
        let doc = Html::parse_document(&reminder_page(&email()).into_string());

        assert_eq!(texts(&doc, "table.expenses th"), vec!["Descrição", "Valor"]);
        assert_eq!(
            texts(&doc, "table.expenses tbody td"),
            vec!["Mensalidade dezembro", "1,250.00", "Tx Boleto <avulsa>", "4.50"]
        );
        assert_eq!(texts(&doc, "table.total td"), vec!["Valor Total:", "1254.50"]);
    }

    #[test]
    fn dynamic_text_is_escaped_and_barcode_is_fixed() {
        let html = reminder_page(&email()).into_string();
        assert!(html.contains("Tx Boleto &lt;avulsa&gt;"));
        assert!(html.contains(BARCODE));
    }
}
