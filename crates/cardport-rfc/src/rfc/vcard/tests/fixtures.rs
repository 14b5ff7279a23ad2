//! vCard import test fixtures.
//!
//! Shapes seen in exports from common address-book applications.

/// Formatted name with typed email and phone
pub const VCARD_BASIC: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:John Smith\r\n\
EMAIL;TYPE=WORK:john@x.com\r\n\
TEL;TYPE=CELL:+15551234567\r\n\
END:VCARD\r\n";

/// FN before N
pub const VCARD_FN_THEN_N: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:John Smith\r\n\
N:Doe;Jane;;;\r\n\
END:VCARD\r\n";

/// N before FN
pub const VCARD_N_THEN_FN: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Doe;Jane;;;\r\n\
FN:John Smith\r\n\
END:VCARD\r\n";

/// Two emails, neither preferred
pub const VCARD_TWO_EMAILS: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Ann Lee\r\n\
EMAIL:ann@home.example\r\n\
EMAIL;TYPE=WORK:ann@work.example\r\n\
END:VCARD\r\n";

/// Second email and phone carry PREF
pub const VCARD_PREFERRED: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Ann Lee\r\n\
EMAIL:ann@home.example\r\n\
EMAIL;TYPE=work;PREF=1:ann@work.example\r\n\
TEL;TYPE=home:+15550001\r\n\
TEL;TYPE=cell;PREF:+15550002\r\n\
END:VCARD\r\n";

/// Folded note
pub const VCARD_FOLDED_NOTE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Carol Note\r\n\
NOTE:This note is split across two phys\r\n \
ical lines.\r\n\
END:VCARD\r\n";

/// Inline photo
pub const VCARD_INLINE_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:Pat Photo\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAAMCAgMCAgMDAwMEAwME\r\n \
BQgFBQQEBQoHBwYIDAoMDAsKCwsNDhIQDQ4RDgsLEBYQERMUFRUVDA8XGBYUGBIUFRT/\r\n\
END:VCARD\r\n";

/// URI photo
pub const VCARD_URI_PHOTO: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Pat Photo\r\n\
PHOTO;VALUE=URI:http://example.com/a.jpg\r\n\
END:VCARD\r\n";

/// Three back-to-back cards with no separator
pub const VCARD_THREE_CONCATENATED: &str = "BEGIN:VCARD\nVERSION:3.0\nFN:First One\nEND:VCARDBEGIN:VCARD\nVERSION:3.0\nFN:Second Two\nEND:VCARDBEGIN:VCARD\nVERSION:3.0\nFN:Third Three\nEND:VCARD";

/// Phone only, no name or organization
pub const VCARD_PHONE_ONLY: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
TEL:+15550100\r\n\
END:VCARD\r\n";

/// Full address book entry
pub const VCARD_FULL: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
N:Wilson;Robert;James;Dr.;PhD\r\n\
FN:Dr. Robert James Wilson PhD\r\n\
ORG:Acme Corporation\r\n\
TITLE:Head of Research\r\n\
item1.EMAIL;type=INTERNET;type=pref:robert@acme.example\r\n\
TEL;TYPE=WORK:+1 555 0100\r\n\
TEL;TYPE=FAX:+1 555 0101\r\n\
ADR;TYPE=WORK:;Suite 5;123 Main St;Anytown;CA;12345;USA\r\n\
ADR:;;456 Oak Ave;Hometown;NY;67890;\r\n\
BDAY:1975-11-30\r\n\
NOTE:First note\r\n\
NOTE:Met at the conference\\, 2019\r\n\
X-SOCIALPROFILE;TYPE=twitter:https://twitter.com/rwilson\r\n\
END:VCARD\r\n";
