use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Tabs, Wrap};

use console_core::Field;

use crate::app::{App, Page, Row, visible_fields};
use crate::docs;
use crate::theme::{Palette, tokens};

pub fn draw(frame: &mut Frame, app: &App) {
    let palette = tokens(app.colour.mode);
    let area = frame.area();

    frame.render_widget(
        Block::new().style(Style::new().bg(palette.background).fg(palette.text)),
        area,
    );

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    draw_tabs(frame, app, &palette, chunks[0]);
    draw_device_line(frame, app, &palette, chunks[1]);
    match app.page {
        Page::TranscribeFiles => draw_transcribe(frame, app, &palette, chunks[2]),
        Page::SetupDocs => draw_docs(frame, app, &palette, chunks[2], docs::SETUP_DOCS),
        Page::ApiDocs => draw_docs(frame, app, &palette, chunks[2], docs::API_DOCS),
    }
    draw_footer(frame, app, &palette, chunks[3]);
}

fn draw_tabs(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let index = Page::ALL
        .iter()
        .position(|page| *page == app.page)
        .unwrap_or(0);

    let tabs = Tabs::new(Page::ALL.iter().map(|page| page.title()))
        .select(index)
        .style(Style::new().fg(palette.muted))
        .highlight_style(
            Style::new()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_device_line(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let device = app.snapshot.device.as_deref().unwrap_or("- N.A. -");
    let line = Line::from(vec![
        Span::styled("Device Type: ", Style::new().fg(palette.muted)),
        Span::styled(device, Style::new().fg(palette.text)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_transcribe(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let panes =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

    let form = Paragraph::new(Text::from(form_lines(app, palette)))
        .block(
            Block::bordered()
                .title("Transcribe Files  [POST]: /transcribe-files")
                .border_style(Style::new().fg(palette.muted)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(form, panes[0]);

    draw_response(frame, app, palette, panes[1]);
}

fn form_lines<'a>(app: &'a App, palette: &Palette) -> Vec<Line<'a>> {
    let muted = Style::new().fg(palette.muted);
    let selected = Style::new()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let snapshot = &app.snapshot;

    let mut lines = vec![
        Line::from(vec![
            Span::styled("File Format: ", muted),
            Span::raw("mp3, mp4, mpeg, mpga, m4a, wav, webm"),
        ]),
        Line::from(vec![Span::styled("File Size Limit (MB): ", muted), Span::raw("25")]),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Files Selected: {}", snapshot.files.len()),
            muted,
        )),
    ];

    for (index, file) in snapshot.files.iter().enumerate() {
        let is_selected = app.selected_row() == Row::File(index);
        let marker = if is_selected { "▸ " } else { "  " };
        let style = if is_selected { selected } else { Style::new().fg(palette.text) };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(&file.name, style),
            Span::styled(format!("  ({})", file.size_label), muted),
        ]));
    }

    if app.is_editing_path() {
        lines.push(Line::from(vec![
            Span::styled("  Add file path: ", muted),
            Span::styled(&app.input_buffer, Style::new().fg(palette.accent)),
            Span::styled("_", Style::new().fg(palette.accent)),
        ]));
    }

    lines.push(Line::raw(""));

    for field in visible_fields(&snapshot.form) {
        let is_selected = app.selected_row() == Row::Field(field);
        let marker = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected { selected } else { muted };

        let value = if field == Field::Criteria && app.is_editing_criteria() {
            format!("{}_", app.input_buffer)
        } else {
            field_value(snapshot, field)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field_label(field), label_style),
            Span::raw(" "),
            Span::styled(value, Style::new().fg(palette.text)),
        ]));

        if let Some(message) = snapshot.errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("      {message}"),
                Style::new().fg(palette.danger),
            )));
        }
    }

    lines.push(Line::raw(""));

    let submit_selected = app.selected_row() == Row::Submit;
    let submit_style = if !snapshot.can_submit {
        Style::new().fg(palette.muted).add_modifier(Modifier::DIM)
    } else if submit_selected {
        selected
    } else {
        Style::new().fg(palette.accent)
    };
    lines.push(Line::from(vec![
        Span::styled(if submit_selected { "▸ " } else { "  " }, submit_style),
        Span::styled("[ Submit ]", submit_style),
    ]));

    if snapshot.pending {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Loading, Please Do Not Refresh The Page...",
            Style::new().fg(palette.accent),
        )));
    }

    lines
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::TranscriptionMethod => "Transcription Method:",
        Field::ModelSize => "Model Size:",
        Field::Diarisation => "Speaker Diarisation:",
        Field::DiarisationMethod => "Diarisation Method:",
        Field::NumSpeakers => "Number of Speakers:",
        Field::Audit => "Transcript Auditing:",
        Field::Criteria => "Audit Criteria:",
    }
}

fn field_value(snapshot: &crate::controller::Snapshot, field: Field) -> String {
    let form = &snapshot.form;
    match field {
        Field::TranscriptionMethod => form.transcription_method.to_string(),
        Field::ModelSize => form.model_size.to_string(),
        Field::Diarisation => checkbox(form.diarisation),
        Field::DiarisationMethod => form.diarisation_method.to_string(),
        Field::NumSpeakers => form.num_speakers.to_string(),
        Field::Audit => checkbox(form.audit),
        Field::Criteria => {
            if form.criteria.is_empty() {
                "(empty)".to_string()
            } else {
                form.criteria.clone()
            }
        }
    }
}

fn checkbox(checked: bool) -> String {
    if checked { "[x]" } else { "[ ]" }.to_string()
}

fn draw_response(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let body = app
        .snapshot
        .response_json
        .as_deref()
        .unwrap_or("");

    let response = Paragraph::new(body)
        .block(
            Block::bordered()
                .title("API Response")
                .border_style(Style::new().fg(palette.muted)),
        )
        .style(Style::new().bg(palette.surface).fg(palette.text))
        .wrap(Wrap { trim: false })
        .scroll((app.response_scroll, 0));
    frame.render_widget(response, area);
}

fn draw_docs(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, text: &'static str) {
    let docs = Paragraph::new(text)
        .block(Block::bordered().border_style(Style::new().fg(palette.muted)))
        .wrap(Wrap { trim: false })
        .scroll((app.docs_scroll, 0));
    frame.render_widget(docs, area);
}

fn draw_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let line = if let Some(toast) = &app.toast {
        let colour = if app.toast_is_error {
            palette.danger
        } else {
            palette.accent
        };
        Line::from(Span::styled(toast.as_str(), Style::new().fg(colour)))
    } else if app.is_editing_path() || app.is_editing_criteria() {
        Line::from(Span::styled(
            "enter confirm · esc cancel",
            Style::new().fg(palette.muted),
        ))
    } else {
        Line::from(Span::styled(
            "q quit · t theme · tab page · ↑↓ move · ←→ edit · enter select · a add file · x remove · s submit · d download",
            Style::new().fg(palette.muted),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}
