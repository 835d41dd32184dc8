//! Printable summary: a standalone HTML document listing artworks as a table.
//!
//! The document is static (no scripts) and carries photos inline as `data:`
//! URLs, so it can be opened and printed from any browser without the files
//! it was built from. Values are HTML-escaped by the template engine.

use crate::error::Result;
use crate::model::Record;
use chrono::NaiveDate;
use minijinja::{Environment, Value};
use serde::Serialize;

const SUMMARY_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <style>
    @page { margin: 2cm; }
    body { font-family: Arial, sans-serif; }
    h1 { text-align: center; color: #333; }
    table { width: 100%; border-collapse: collapse; margin-top: 20px; }
    th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
    th { background-color: #f2f2f2; font-weight: bold; }
    tr:nth-child(even) { background-color: #f9f9f9; }
    .status { padding: 2px 8px; border-radius: 4px; font-size: 12px; }
    .available { background-color: #d4edda; color: #155724; }
    .on-hold { background-color: #fff3cd; color: #856404; }
    .sold { background-color: #f8d7da; color: #721c24; }
    .nfs { background-color: #e2e3e5; color: #383d41; }
    .photo { width: 100px; height: 100px; object-fit: cover; }
    @media print { body { -webkit-print-color-adjust: exact; } }
  </style>
</head>
<body>
  <h1>{{ title }}</h1>
  <p>列印日期：{{ date }}</p>
  <p>總計：{{ rows | length }} 件作品</p>
  <table>
    <thead>
      <tr>
        <th>照片</th>
        <th>編號</th>
        <th>藝術家</th>
        <th>作品名稱</th>
        <th>創作理念</th>
        <th>媒材</th>
        <th>尺寸</th>
        <th>標價</th>
        <th>狀態</th>
      </tr>
    </thead>
    <tbody>
{%- for row in rows %}
      <tr>
        <td>{% if row.photo %}<img src="{{ row.photo }}" class="photo" />{% else %}無照片{% endif %}</td>
        <td>{{ row.number }}</td>
        <td>{{ row.artist }}</td>
        <td><strong>{{ row.title }}</strong></td>
        <td>{{ row.concept }}</td>
        <td>{{ row.medium }}</td>
        <td>{{ row.size }}</td>
        <td>{{ row.price }}</td>
        <td><span class="status {{ row.status_class }}">{{ row.status }}</span></td>
      </tr>
{%- endfor %}
    </tbody>
  </table>
</body>
</html>
"#;

#[derive(Serialize)]
struct SummaryRow<'a> {
    photo: Option<Value>,
    number: &'a str,
    artist: &'a str,
    title: &'a str,
    concept: &'a str,
    medium: &'a str,
    size: &'a str,
    price: &'a str,
    status: &'static str,
    status_class: &'static str,
}

#[derive(Serialize)]
struct SummaryData<'a> {
    title: &'a str,
    date: String,
    rows: Vec<SummaryRow<'a>>,
}

/// Formats a date the way the summary prints it: `2024/3/5`.
pub fn print_date(date: NaiveDate) -> String {
    date.format("%Y/%-m/%-d").to_string()
}

/// Renders `records` (already filtered by the caller) as an HTML document.
pub fn render_summary<'a, I>(records: I, title: &str, date: NaiveDate) -> Result<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let rows = records
        .into_iter()
        .map(|r| {
            let a = &r.artwork;
            SummaryRow {
                // data URLs hold only the media type and base64, nothing to escape
                photo: a.photo.as_ref().map(|p| Value::from_safe_string(p.to_data_url())),
                number: &a.number,
                artist: &a.artist,
                title: &a.title,
                concept: &a.concept,
                medium: &a.medium,
                size: &a.size,
                price: &a.price,
                status: a.status.label(),
                status_class: a.status.css_class(),
            }
        })
        .collect();

    let data = SummaryData {
        title,
        date: print_date(date),
        rows,
    };

    let mut env = Environment::new();
    env.add_template("summary.html", SUMMARY_TEMPLATE)?;
    let rendered = env.get_template("summary.html")?.render(&data)?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artwork, Photo, RecordId, Status};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn renders_rows_count_and_date() {
        let mut sold = Artwork::new("晨曦");
        sold.artist = "王小明".into();
        sold.status = Status::OnHold;
        let records = vec![
            Record::new(RecordId(1), sold),
            Record::new(RecordId(2), Artwork::new("日落")),
        ];
        let html = render_summary(&records, "藝術作品清單", date()).unwrap();

        assert!(html.contains("<h1>藝術作品清單</h1>"));
        assert!(html.contains("列印日期：2024/3/5"));
        assert!(html.contains("總計：2 件作品"));
        assert!(html.contains("<strong>晨曦</strong>"));
        assert!(html.contains(r#"class="status on-hold">On Hold</span>"#));
        assert_eq!(html.matches("無照片").count(), 2);
    }

    #[test]
    fn embeds_photo_as_data_url() {
        let mut art = Artwork::new("with photo");
        art.photo = Some(Photo::new("image/png", vec![1, 2, 3]));
        let records = vec![Record::new(RecordId(1), art)];
        let html = render_summary(&records, "t", date()).unwrap();
        assert!(html.contains("data:image/png;base64,AQID"));
        assert!(!html.contains("無照片"));
    }

    #[test]
    fn escapes_markup_in_fields() {
        let records = vec![Record::new(RecordId(1), Artwork::new("<script>x</script>"))];
        let html = render_summary(&records, "t", date()).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_list_still_renders() {
        let html = render_summary(std::iter::empty::<&Record>(), "t", date()).unwrap();
        assert!(html.contains("總計：0 件作品"));
    }
}
