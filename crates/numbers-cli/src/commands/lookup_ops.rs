use serde::Serialize;

use steno_numbers::NumbersDictionary;

/// One outline's lookup result, as printed with `--json`.
#[derive(Debug, Serialize, PartialEq)]
pub struct LookupRecord<'a> {
    pub outline: &'a str,
    pub translation: Option<String>,
    pub error: Option<String>,
}

pub fn lookup_record<'a>(dict: &NumbersDictionary, outline: &'a str) -> LookupRecord<'a> {
    match dict.lookup_outline(outline) {
        Ok(translation) => LookupRecord {
            outline,
            translation: Some(translation),
            error: None,
        },
        Err(e) => LookupRecord {
            outline,
            translation: None,
            error: Some(e.to_string()),
        },
    }
}

pub fn lookup_cmd(outlines: &[String], json: bool) {
    let dict = NumbersDictionary::new();
    for outline in outlines {
        let record = lookup_record(&dict, outline);
        if json {
            let line = die!(serde_json::to_string(&record), "Error: {}");
            println!("{line}");
        } else {
            match &record.translation {
                Some(translation) => println!("{outline}\t{translation}"),
                None => println!("{outline}\t(no entry)"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_for_translation() {
        let dict = NumbersDictionary::new();
        let record = lookup_record(&dict, "12/3KR");
        assert_eq!(record.translation.as_deref(), Some("123%"));
        assert!(record.error.is_none());
    }

    #[test]
    fn record_for_missing_entry() {
        let dict = NumbersDictionary::new();
        let record = lookup_record(&dict, "KR");
        assert!(record.translation.is_none());
        assert!(record.error.unwrap().contains("\"KR\""));
    }

    #[test]
    fn record_serializes_as_json() {
        let dict = NumbersDictionary::new();
        let record = lookup_record(&dict, "1W");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["outline"], "1W");
        assert_eq!(json["translation"], "1st");
        assert!(json["error"].is_null());
    }
}
