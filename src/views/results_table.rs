use iced::widget::{button, column, row, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::model::{ResultsTable, SortColumn};
use crate::utils::{format_color_depth, format_compression, format_dimensions, format_resolution};

/// Header row plus one button per record; pressing a header re-sorts,
/// pressing a row twice opens the file.
pub fn results_table(table: &ResultsTable) -> Element<'_, Message> {
    let header = row![
        header_button("Filename", SortColumn::Filename, 2),
        header_button("Dimensions", SortColumn::Dimensions, 1),
        header_button("Resolution", SortColumn::Resolution, 1),
        header_button("Color Depth", SortColumn::ColorDepth, 1),
        header_button("Compression", SortColumn::Compression, 1),
    ]
    .spacing(12);

    let mut body = column![];
    for (id, record) in table.rows() {
        body = body.push(
            button(
                row![
                    text(&record.filename).width(Length::FillPortion(2)),
                    text(format_dimensions(record.dimensions)).width(Length::FillPortion(1)),
                    text(format_resolution(record.resolution)).width(Length::FillPortion(1)),
                    text(format_color_depth(record.color_depth)).width(Length::FillPortion(1)),
                    text(format_compression(record.compression.as_deref()))
                        .width(Length::FillPortion(1)),
                ]
                .spacing(12),
            )
            .width(Length::Fill)
            .on_press(Message::RowPressed(id)),
        );
    }

    column![header, scrollable(body.spacing(2)).height(Length::Fill)]
        .spacing(8)
        .into()
}

fn header_button(
    label: &'static str,
    column: SortColumn,
    portion: u16,
) -> iced::widget::Button<'static, Message> {
    button(text(label))
        .width(Length::FillPortion(portion))
        .on_press(Message::SortRequested(column))
}
