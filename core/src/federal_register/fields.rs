//! Default `fields[]` lists, sent when a caller asks for every field.

/// Attributes returned for a Federal Register document.
pub const DOCUMENT_FIELDS: &[&str] = &[
    "abstract",
    "action",
    "agencies",
    "agency_names",
    "body_html_url",
    "cfr_references",
    "citation",
    "comment_url",
    "comments_close_on",
    "correction_of",
    "corrections",
    "dates",
    "docket_id",
    "docket_ids",
    "document_number",
    "effective_on",
    "end_page",
    "excerpts",
    "executive_order_notes",
    "executive_order_number",
    "full_text_xml_url",
    "html_url",
    "images",
    "json_url",
    "mods_url",
    "page_length",
    "pdf_url",
    "president",
    "public_inspection_pdf_url",
    "publication_date",
    "raw_text_url",
    "regulation_id_number_info",
    "regulation_id_numbers",
    "regulations_dot_gov_info",
    "regulations_dot_gov_url",
    "significant",
    "signing_date",
    "start_page",
    "subtype",
    "title",
    "toc_doc",
    "toc_subject",
    "topics",
    "type",
    "volume",
];

/// Attributes returned for a public inspection document.
pub const PUBLIC_INSPECTION_FIELDS: &[&str] = &[
    "agencies",
    "agency_letters",
    "agency_names",
    "docket_numbers",
    "document_number",
    "editorial_note",
    "excerpts",
    "filed_at",
    "filing_type",
    "html_url",
    "json_url",
    "last_public_inspection_issue",
    "num_pages",
    "pdf_file_name",
    "pdf_file_size",
    "pdf_updated_at",
    "pdf_url",
    "publication_date",
    "raw_text_url",
    "subject_1",
    "subject_2",
    "subject_3",
    "title",
    "toc_doc",
    "toc_subject",
    "type",
];
