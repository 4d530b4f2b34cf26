//! `.TcDUT` wrapper: the STRUCT text embedded in a TwinCAT PLC object.

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, Event};
use uuid::Uuid;

use crate::RenderError;

/// `Version` attribute of the `TcPlcObject` root.
pub const TCPLC_OBJECT_VERSION: &str = "1.1.0.1";

/// Wraps STRUCT text in a TcDUT document with a fresh random id.
pub fn render_tcdut(dut_name: &str, struct_text: &str) -> Result<String, RenderError> {
    render_tcdut_with_id(dut_name, struct_text, Uuid::new_v4())
}

/// Wraps STRUCT text in a TcDUT document using the given object id.
///
/// The declaration sits in CDATA framed by newlines and the document ends
/// with a newline. Text containing `]]>` spans several CDATA sections whose
/// contents join back to the original.
pub fn render_tcdut_with_id(
    dut_name: &str,
    struct_text: &str,
    id: Uuid,
) -> Result<String, RenderError> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(RenderError::xml)?;

    let mut root = BytesStart::new("TcPlcObject");
    root.push_attribute(("Version", TCPLC_OBJECT_VERSION));
    xml.write_event(Event::Start(root))
        .map_err(RenderError::xml)?;

    let object_id = format!("{{{id}}}");
    let mut dut = BytesStart::new("DUT");
    dut.push_attribute(("Name", dut_name));
    dut.push_attribute(("Id", object_id.as_str()));
    xml.write_event(Event::Start(dut)).map_err(RenderError::xml)?;

    xml.write_event(Event::Start(BytesStart::new("Declaration")))
        .map_err(RenderError::xml)?;
    // A `]]>` inside sheet text is split across adjacent CDATA sections.
    let declaration = format!("\n{struct_text}\n");
    for section in BytesCData::escaped(&declaration) {
        xml.write_event(Event::CData(section))
            .map_err(RenderError::xml)?;
    }
    xml.write_event(Event::End(BytesEnd::new("Declaration")))
        .map_err(RenderError::xml)?;

    xml.write_event(Event::End(BytesEnd::new("DUT")))
        .map_err(RenderError::xml)?;
    xml.write_event(Event::End(BytesEnd::new("TcPlcObject")))
        .map_err(RenderError::xml)?;

    let mut document = String::from_utf8(xml.into_inner())?;
    document.push('\n');
    Ok(document)
}
