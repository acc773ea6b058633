// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::mem;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde_json::{Map, Value};

use crate::{Error, Result};

use super::{Collection, Record};

const ATTRIBUTE_PREFIX: char = '@';

const TEXT_KEY: &str = "#text";

const ROOT_ELEMENT: &str = "items";

const ITEM_ELEMENT: &str = "item";

pub(super) fn parse_collection(xml: &str) -> Result<Collection> {
    let mut document = parse_document(xml)?;
    let items = match document.remove(ROOT_ELEMENT) {
        Some(Value::Object(mut items)) => items.remove(ITEM_ELEMENT),
        Some(Value::Null) | None => None,
        Some(_) => {
            return Err(Error::Shape(format!(
                "unexpected content of <{ROOT_ELEMENT}>"
            )));
        }
    };
    let records: Vec<_> = match items {
        Some(Value::Array(items)) => items.into_iter().filter_map(into_record).collect(),
        Some(item) => into_record(item).into_iter().collect(),
        None => Vec::new(),
    };
    log::debug!("Parsed {} record(s) from XML", records.len());
    Ok(Collection::new(records))
}

fn into_record(value: Value) -> Option<Record> {
    match value {
        Value::Object(fields) => Some(Record::new(fields)),
        value => {
            log::warn!("Skipping malformed <{ITEM_ELEMENT}>: {value}");
            None
        }
    }
}

#[derive(Debug, Default)]
struct Element {
    name: String,
    fields: Map<String, Value>,
    text: String,
}

impl Element {
    fn start(start: &BytesStart<'_>) -> Result<Self> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
        let mut fields = Map::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = format!(
                "{ATTRIBUTE_PREFIX}{}",
                String::from_utf8_lossy(attr.key.as_ref())
            );
            let value = attr.unescape_value()?.into_owned();
            fields.insert(key, Value::String(value));
        }
        Ok(Self {
            name,
            fields,
            text: String::new(),
        })
    }

    fn add_child(&mut self, name: String, value: Value) {
        let Some(existing) = self.fields.get_mut(&name) else {
            self.fields.insert(name, value);
            return;
        };
        // Child values are never sequences by themselves
        if let Value::Array(siblings) = existing {
            siblings.push(value);
        } else {
            let first = mem::take(existing);
            *existing = Value::Array(vec![first, value]);
        }
    }

    fn finish(self) -> (String, Value) {
        let Self {
            name,
            mut fields,
            text,
        } = self;
        let text = text.trim();
        let value = if fields.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_owned())
            }
        } else {
            if !text.is_empty() {
                fields.insert(TEXT_KEY.to_owned(), Value::String(text.to_owned()));
            }
            Value::Object(fields)
        };
        (name, value)
    }
}

/// Convert an XML document into a tree of nested mappings.
fn parse_document(xml: &str) -> Result<Map<String, Value>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut stack = vec![Element::default()];
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                stack.push(Element::start(&start)?);
            }
            Event::Empty(start) => {
                let (name, value) = Element::start(&start)?.finish();
                current(&mut stack)?.add_child(name, value);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .filter(|_| !stack.is_empty())
                    .ok_or_else(|| Error::Shape("unbalanced end tag".to_owned()))?;
                let (name, value) = element.finish();
                current(&mut stack)?.add_child(name, value);
            }
            Event::Text(text) => {
                current(&mut stack)?.text.push_str(&text.unescape()?);
            }
            Event::CData(cdata) => {
                current(&mut stack)?
                    .text
                    .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
            }
            Event::Eof => break,
            // Declarations, comments, and processing instructions
            _ => (),
        }
    }
    if stack.len() != 1 {
        return Err(Error::Shape("unexpected end of document".to_owned()));
    }
    let root = stack.pop().unwrap_or_default();
    Ok(root.fields)
}

fn current(stack: &mut [Element]) -> Result<&mut Element> {
    stack
        .last_mut()
        .ok_or_else(|| Error::Shape("no enclosing element".to_owned()))
}
