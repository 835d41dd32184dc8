use artlist::api::{CmdMessage, DraftView, MessageLevel};
use artlist::config::ArtlistConfig;
use artlist::model::{Artwork, Field, Record, Status};
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const PHOTO_MARKER: &str = "▣";

/// List columns and their maximum display widths.
const LIST_COLUMNS: [(Field, usize); 7] = [
    (Field::Number, 10),
    (Field::Artist, 14),
    (Field::Title, 24),
    (Field::Medium, 14),
    (Field::Size, 12),
    (Field::Price, 12),
    (Field::Status, 9),
];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: impl std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", err).red());
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No artworks found.");
        return;
    }

    let widths: Vec<usize> = LIST_COLUMNS
        .iter()
        .map(|(field, max)| {
            records
                .iter()
                .map(|r| r.artwork.get(*field).width())
                .chain(std::iter::once(field.label().width()))
                .max()
                .unwrap_or(0)
                .min(*max)
        })
        .collect();

    let mut header = format!("{:>ID_WIDTH$}  ", "#");
    for ((field, _), width) in LIST_COLUMNS.iter().zip(&widths) {
        header.push_str(&pad_to_width(field.label(), *width));
        header.push_str("  ");
    }
    println!("{}", header.trim_end().bold());

    for record in records {
        let mut line = format!("{:>ID_WIDTH$}  ", record.id);
        for ((field, _), width) in LIST_COLUMNS.iter().zip(&widths) {
            let cell = pad_to_width(record.artwork.get(*field), *width);
            if *field == Field::Status {
                line.push_str(&status_colored(record.artwork.status, cell).to_string());
            } else {
                line.push_str(&cell);
            }
            line.push_str("  ");
        }
        if record.artwork.photo.is_some() {
            line.push_str(PHOTO_MARKER);
        }
        println!("{}", line.trim_end());
    }
}

pub(super) fn print_record(record: &Record) {
    println!("{} {}", format!("#{}", record.id).yellow(), record.artwork.title.bold());
    println!("--------------------------------");
    print_fields(&record.artwork);
}

pub(super) fn print_draft(view: &DraftView) {
    println!("{}", format!("Draft for {}", view.target).yellow());
    println!("--------------------------------");
    print_fields(&view.artwork);
}

fn print_fields(artwork: &Artwork) {
    let label_width = Field::ALL
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0);
    for field in Field::ALL {
        let label = pad_to_width(field.label(), label_width);
        println!("{}  {}", label.dimmed(), artwork.get(field));
    }
    let photo = match &artwork.photo {
        Some(p) => format!("{} ({} bytes)", p.mime, p.bytes.len()),
        None => "無照片".to_string(),
    };
    println!("{}  {}", pad_to_width("照片", label_width).dimmed(), photo);
}

pub(super) fn print_config(config: &ArtlistConfig) {
    for key in ArtlistConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn status_colored(status: Status, cell: String) -> ColoredString {
    match status {
        Status::Available => cell.green(),
        Status::OnHold => cell.yellow(),
        Status::Sold => cell.red(),
        Status::Nfs => cell.dimmed(),
    }
}

/// Truncates to `max_width` display columns, then pads with spaces to exactly
/// that width. Wide (CJK) characters count as two columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(out.width());
    out.push_str(&" ".repeat(padding));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_wide_characters() {
        assert_eq!(truncate_to_width("藝術作品清單", 5), "藝術…");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }

    #[test]
    fn padding_fills_display_width() {
        assert_eq!(pad_to_width("晨曦", 6), "晨曦  ");
        assert_eq!(pad_to_width("abc", 3), "abc");
        assert_eq!(pad_to_width("abcdef", 4).width(), 4);
    }
}
