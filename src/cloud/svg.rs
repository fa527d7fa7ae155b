//! SVG output for a laid out cloud

use quick_xml::{
    events::{BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::io::Cursor;

use super::layout::{CloudLayout, Orientation, PlacedWord};
use super::options::Background;
use super::CloudError;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// Render `layout` as a standalone SVG document
pub fn render(layout: &CloudLayout, background: Background) -> Result<String, CloudError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let width = layout.width.to_string();
    let height = layout.height.to_string();
    let view_box = format!("0 0 {} {}", layout.width, layout.height);

    let mut svg = BytesStart::new("svg");
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("viewBox", view_box.as_str()));
    svg.push_attribute(("role", "img"));
    svg.push_attribute(("aria-label", "Word cloud"));
    writer.write_event(Event::Start(svg))?;

    // Background
    let mut rect = BytesStart::new("rect");
    rect.push_attribute(("width", "100%"));
    rect.push_attribute(("height", "100%"));
    rect.push_attribute(("fill", background.as_str()));
    writer.write_event(Event::Empty(rect))?;

    let mut group = BytesStart::new("g");
    group.push_attribute(("font-family", FONT_FAMILY));
    group.push_attribute(("text-anchor", "middle"));
    group.push_attribute(("dominant-baseline", "central"));
    writer.write_event(Event::Start(group))?;

    for word in &layout.words {
        write_word(&mut writer, word)?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))?;
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn write_word<W: std::io::Write>(writer: &mut Writer<W>, word: &PlacedWord) -> Result<(), CloudError> {
    let (cx, cy) = word.bounds.center();
    let x = format!("{:.1}", cx);
    let y = format!("{:.1}", cy);
    let font_size = word.font_size.to_string();

    let mut elem = BytesStart::new("text");
    elem.push_attribute(("x", x.as_str()));
    elem.push_attribute(("y", y.as_str()));
    elem.push_attribute(("font-size", font_size.as_str()));
    elem.push_attribute(("fill", word.color));
    if word.orientation == Orientation::Vertical {
        let transform = format!("rotate(-90 {} {})", x, y);
        elem.push_attribute(("transform", transform.as_str()));
    }

    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(&word.word)))?;
    writer.write_event(Event::End(BytesEnd::new("text")))?;
    Ok(())
}
