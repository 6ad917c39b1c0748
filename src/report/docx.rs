//! Word (.docx) report writer.
//!
//! A .docx file is a ZIP archive of Office Open XML parts. Only the parts Word
//! needs to open the document are written: content types, package and
//! document relationships, core properties, styles and the document body.

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::sink::ReportSink;
use super::types::{Report, ReportSection};

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

// Calibri 11pt body, 18pt bold title, 14pt bold headings (sizes in half-points)
const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:jc w:val="center"/><w:spacing w:after="320"/></w:pPr><w:rPr><w:b/><w:sz w:val="36"/><w:szCs w:val="36"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:pPr><w:keepNext/><w:spacing w:before="360" w:after="120"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="28"/><w:szCs w:val="28"/></w:rPr></w:style></w:styles>"#;

const SECTION_PROPERTIES_XML: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#;

/// Writes the report as a .docx file at a fixed path.
///
/// The archive is built under a temporary name next to the target and renamed
/// into place, so a failed write leaves no partial report behind.
pub struct DocxWriter {
    path: PathBuf,
}

impl DocxWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_archive(&self, report: &Report, target: &Path) -> Result<()> {
        let file = File::create(target)
            .with_context(|| format!("Failed to create {}", target.display()))?;

        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let parts: [(&str, String); 6] = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
            ("docProps/core.xml", core_properties_xml(report)),
            ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
            ("word/styles.xml", STYLES_XML.to_string()),
            ("word/document.xml", document_xml(report)),
        ];

        for (name, contents) in parts {
            zip.start_file(name, options)
                .with_context(|| format!("Failed to add {} to report archive", name))?;
            zip.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write {} to report archive", name))?;
        }

        zip.finish().context("Failed to finalize report archive")?;
        Ok(())
    }
}

impl ReportSink for DocxWriter {
    fn persist(&self, report: &Report) -> Result<PathBuf> {
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".partial");
        let tmp_path = PathBuf::from(tmp_name);

        if let Err(e) = self.write_archive(report, &tmp_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| {
                format!(
                    "Failed to move report into place at {}",
                    self.path.display()
                )
            });
        }

        tracing::info!(path = %self.path.display(), sections = report.sections.len(), "report written");
        Ok(self.path.clone())
    }
}

/// Render `word/document.xml`: centred title, then a Heading 1 and body
/// paragraphs for each section.
pub fn document_xml(report: &Report) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    xml.push_str(&format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
        xml_text(&report.title)
    ));

    for section in &report.sections {
        push_section(&mut xml, section);
    }

    xml.push_str(SECTION_PROPERTIES_XML);
    xml.push_str("</w:body></w:document>");
    xml
}

fn push_section(xml: &mut String, section: &ReportSection) {
    xml.push_str(&format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
        xml_text(&section.heading)
    ));

    // 240 twips = one line
    let line = (section.line_spacing * 240.0).round() as u32;

    // blank lines split paragraphs; single newlines become line breaks
    for paragraph in section.body.split("\n\n") {
        let lines: Vec<&str> = paragraph.lines().collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            continue;
        }

        xml.push_str(&format!(
            r#"<w:p><w:pPr><w:spacing w:line="{}" w:lineRule="auto"/></w:pPr><w:r>"#,
            line
        ));
        for (i, text) in lines.iter().enumerate() {
            if i > 0 {
                xml.push_str("<w:br/>");
            }
            xml.push_str(&format!(
                r#"<w:t xml:space="preserve">{}</w:t>"#,
                xml_text(text)
            ));
        }
        xml.push_str("</w:r></w:p>");
    }
}

fn core_properties_xml(report: &Report) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>torqa</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created></cp:coreProperties>"#,
        xml_text(&report.title),
        report.generated_at.format("%Y-%m-%dT%H:%M:%SZ")
    )
}

/// Escape text for an XML text node, dropping control characters XML 1.0
/// cannot carry.
fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| c == '\t' || c == '\n' || c == '\r' || c >= ' ')
        .collect();
    escape(cleaned.as_str()).into_owned()
}
