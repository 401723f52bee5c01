use super::Classification;
use std::fmt::{self, Write};

/// [`Display`](fmt::Display) wrapper rendering a [`Classification`]
/// as a `UserAgent` XML element:
///
/// ```xml
/// <UserAgent string="Wget/1.12 (linux-gnu)"><Recognized name="Device-Phone"/>...</UserAgent>
/// ```
///
/// Created using [`Classification::to_xml_element`].
#[derive(Debug, Clone, Copy)]
pub struct XmlElement<'a>(&'a Classification);

impl Classification {
    /// Render this [`Classification`] as a `UserAgent` XML element,
    /// with one `Recognized` child per tag.
    #[must_use]
    pub fn to_xml_element(&self) -> XmlElement<'_> {
        XmlElement(self)
    }
}

impl fmt::Display for XmlElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<UserAgent string=\"")?;
        write_escaped_attr(f, self.0.agent())?;
        f.write_str("\">")?;
        for tag in self.0.tags() {
            f.write_str("<Recognized name=\"")?;
            write_escaped_attr(f, tag)?;
            f.write_str("\"/>")?;
        }
        f.write_str("</UserAgent>")
    }
}

fn write_escaped_attr(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&apos;")?,
            // kept as character references, attribute normalization would turn them into spaces
            '\t' => f.write_str("&#9;")?,
            '\n' => f.write_str("&#10;")?,
            '\r' => f.write_str("&#13;")?,
            // other C0 controls cannot be represented in XML 1.0
            '\u{0}'..='\u{1F}' => {}
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
