use crate::domain::money::{format_grouped, format_plain};
use crate::domain::ReminderLine;
use maud::{html, Markup};
use rust_decimal::Decimal;

const CELL_STYLE: &str = "border-bottom: 1px solid #dddddd; text-align: right; padding: 8px";
const FIRST_CELL_STYLE: &str = "border-bottom: 1px solid #dddddd; text-align: left; padding: 8px";

/// Description / amount table of a member's statement.
pub fn expenses_table(lines: &[ReminderLine]) -> Markup {
    html! {
        table class="expenses" {
            thead {
                tr {
                    th style=(FIRST_CELL_STYLE) { "Descrição" }
                    th style=(CELL_STYLE) { "Valor" }
                }
            }
            tbody {
                @for line in lines {
                    tr {
                        td style=(FIRST_CELL_STYLE) { (line.description) }
                        td style=(CELL_STYLE) { (format_grouped(line.amount)) }
                    }
                }
            }
        }
    }
}

pub fn total_row(total: Decimal) -> Markup {
    html! {
        table class="total" {
            tr {
                td align="left" style="padding: 8px" { b { "Valor Total:" } }
                td align="right" style="padding: 8px" { (format_plain(total)) }
            }
        }
    }
}
