/// Constants used throughout the docreview application
/// This module centralizes fixture data and default values

/// The only MIME type accepted at intake
pub const PDF_MIME: &str = "application/pdf";

/// MIME type declared for files whose extension is not recognized
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Default simulated processing time after a file is accepted
pub const DEFAULT_PROCESSING_DELAY_MS: u64 = 2000;

/// Default delay before the chat assistant replies
pub const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;

/// Default tracing filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "docreview=info";

/// Field name used when overriding a record that holds a single value or a list
pub const VALUE_FIELD: &str = "value";

/// Extension to declared MIME type, mirroring what a browser file picker reports
pub const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", PDF_MIME),
    ("txt", "text/plain"),
    ("text", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("zip", "application/zip"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
];

/// Hotel contract fields, in display order
pub const CONTRACT_FIELDS: &[(&str, &str)] = &[
    ("Hotel Name", "Grand Oceanview Resort & Spa"),
    ("Contract Date", "January 15, 2024"),
    ("Contract Term", "12 months"),
    ("Room Rates", "$199/night"),
    ("Cancellation Policy", "48 hours prior to check-in"),
    ("Commission Rate", "15%"),
    ("Payment Terms", "Net 30 days"),
    ("Special Clauses", "Complimentary breakfast included"),
];

/// Invoice fields holding a single value, in display order
pub const INVOICE_FIELDS: &[(&str, &str)] = &[
    ("Invoice Number", "INV-123456"),
    ("Invoice Date", "January 15, 2024"),
    ("Due Date", "February 15, 2024"),
    ("Total Amount", "$1,200"),
    ("Payment Terms", "Net 30 days"),
];

/// Key of the invoice line-item record (displayed after the single-value fields)
pub const INVOICE_ITEMS_KEY: &str = "Items";

/// Invoice line items
pub const INVOICE_ITEMS: &[&str] = &["Room Charges: $1,000", "Taxes: $200"];

/// Sub-field names of a rate-loading record
pub const RATE_CODE_FIELD: &str = "rate_code";
pub const CITY_CODE_FIELD: &str = "city_code";

/// GDS rate and pseudo city codes: (GDS, rate code, pseudo city code)
pub const RATE_LOADING_CODES: &[(&str, &str, &str)] = &[
    ("Sabre", "TL7", "3MRC"),
    ("Worldspan", "7TL", "C0P"),
    ("Apollo/Galileo", "7TL", "1Y0I"),
    ("Amadeus", "7TL", ""),
    ("Pegasus", "7TL", "TB"),
];

/// Chat keyword rules, checked in order against the lowercased question
pub const CHAT_KEYWORD_REPLIES: &[(&str, &str)] = &[
    ("total", "Could you please specify which total you're referring to?"),
    (
        "date",
        "The invoice date is usually mentioned at the top of the document. Can you provide more details?",
    ),
    (
        "tax",
        "Taxes are typically calculated based on the subtotal. Do you want to know the tax rate?",
    ),
];

/// Reply used when no keyword matches
pub const CHAT_FALLBACK_REPLY: &str =
    "I'm sorry, I don't have information about that. Can you please clarify?";
