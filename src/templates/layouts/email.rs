use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Stylesheet for transactional emails. Clients that drop `<style>` still get
/// the inline styles set on the table components.
const EMAIL_CSS: &str = r#"
img { border: none; -ms-interpolation-mode: bicubic; max-width: 100%; }
body {
  background-color: #f6f6f6;
  font-family: sans-serif;
  -webkit-font-smoothing: antialiased;
  font-size: 14px;
  line-height: 1.4;
  margin: 0;
  padding: 0;
  -ms-text-size-adjust: 100%;
  -webkit-text-size-adjust: 100%;
}
table { border-collapse: collapse; mso-table-lspace: 0pt; mso-table-rspace: 0pt; width: 100%; }
table td { font-family: sans-serif; font-size: 14px; vertical-align: top; }
.body { background-color: #f6f6f6; width: 100%; }
.container { display: block; margin: 0 auto !important; max-width: 580px; padding: 10px; width: 580px; }
.content { box-sizing: border-box; display: block; margin: 0 auto; max-width: 580px; padding: 10px; }
.main { background: #ffffff; border-radius: 3px; width: 100%; }
.wrapper { box-sizing: border-box; padding: 20px; }
.content-block { padding-bottom: 10px; padding-top: 10px; }
.footer { clear: both; margin-top: 10px; text-align: center; width: 100%; }
.footer td, .footer p, .footer span, .footer a { color: #999999; font-size: 12px; text-align: center; }
p, ul, ol { font-family: sans-serif; font-size: 14px; font-weight: normal; margin: 0; margin-bottom: 15px; }
a { color: #3498db; text-decoration: underline; }
.btn { box-sizing: border-box; width: 100%; }
.btn > tbody > tr > td { padding-bottom: 15px; }
.btn table { width: auto; }
.btn table td { background-color: #ffffff; border-radius: 5px; text-align: center; }
.btn a {
  background-color: #ffffff;
  border: solid 1px #3498db;
  border-radius: 5px;
  box-sizing: border-box;
  color: #3498db;
  cursor: pointer;
  display: inline-block;
  font-size: 14px;
  font-weight: bold;
  margin: 0;
  padding: 12px 25px;
  text-decoration: none;
  text-transform: capitalize;
}
.btn-primary table td { background-color: #3498db; }
.btn-primary a { background-color: #3498db; border-color: #3498db; color: #ffffff; }
.preheader {
  color: transparent;
  display: none;
  height: 0;
  max-height: 0;
  max-width: 0;
  opacity: 0;
  overflow: hidden;
  mso-hide: all;
  visibility: hidden;
  width: 0;
}
.powered-by a { text-decoration: none; }
@media only screen and (max-width: 620px) {
  table.body p, table.body td, table.body span, table.body a { font-size: 16px !important; }
  table.body .wrapper { padding: 10px !important; }
  table.body .content { padding: 0 !important; }
  table.body .container { padding: 0 !important; width: 100% !important; }
  table.body .main { border-left-width: 0 !important; border-radius: 0 !important; border-right-width: 0 !important; }
  table.body .btn table, table.body .btn a { width: 100% !important; }
}
@media all {
  .ExternalClass { width: 100%; }
  .apple-link a { color: inherit !important; font-family: inherit !important; text-decoration: none !important; }
  .btn-primary a:hover { background-color: #34495e !important; border-color: #34495e !important; }
}
"#;

/// Centered white card on a grey background, with an optional footer below it.
pub fn email_layout(title: &str, preheader: &str, content: Markup, footer: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta http-equiv="Content-Type" content="text/html; charset=UTF-8";
                title { (title) }
                style { (PreEscaped(EMAIL_CSS)) }
            }
            body {
                span class="preheader" { (preheader) }
                table role="presentation" border="0" cellpadding="0" cellspacing="0" class="body" {
                    tr {
                        td { (PreEscaped("&nbsp;")) }
                        td class="container" {
                            div class="content" {
                                table role="presentation" class="main" {
                                    tr {
                                        td class="wrapper" { (content) }
                                    }
                                }
                                div class="footer" { (footer) }
                            }
                        }
                        td { (PreEscaped("&nbsp;")) }
                    }
                }
            }
        }
    }
}
