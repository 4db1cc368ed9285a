// Snapshot encoding: the trie as a nested mapping with a reserved count key
//
// Each node is a map. Single-character keys (`a`-`z`, `'`) hold child nodes;
// the reserved key `_` holds the node's count. Counts are non-negative
// integers, and the definite weight is the string "definite":
//
//   {"t": {"h": {"i": {"s": {"_": 2}}, "s": {"_": 1}}}}

use std::fmt;

use anne_core::character::is_key_char;
use anne_core::enums::MAX_WORD_CHARS;
use serde::de::{self, DeserializeSeed, MapAccess, Unexpected, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::node::TrieNode;
use crate::trie::FrequencyTrie;
use crate::weight::Weight;
use crate::{COUNT_KEY, DEFINITE_MARKER, SnapshotError};

// ---------------------------------------------------------------------------
// Weight
// ---------------------------------------------------------------------------

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Weight::Finite(n) => serializer.serialize_u64(*n),
            Weight::Definite => serializer.serialize_str(DEFINITE_MARKER),
        }
    }
}

struct WeightVisitor;

impl Visitor<'_> for WeightVisitor {
    type Value = Weight;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative integer count or \"{DEFINITE_MARKER}\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Weight, E> {
        Ok(Weight::Finite(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Weight, E> {
        u64::try_from(v)
            .map(Weight::Finite)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Weight, E> {
        if v == f64::INFINITY {
            return Ok(Weight::Definite);
        }
        if v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
            return Ok(Weight::Finite(v as u64));
        }
        Err(E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Weight, E> {
        match v {
            DEFINITE_MARKER | "Infinity" => Ok(Weight::Definite),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    // Non-finite numbers are written as `null` by JSON encoders that have no
    // infinity literal.
    fn visit_unit<E: de::Error>(self) -> Result<Weight, E> {
        Ok(Weight::Definite)
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WeightVisitor)
    }
}

// ---------------------------------------------------------------------------
// TrieNode
// ---------------------------------------------------------------------------

impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.children.len() + usize::from(self.count.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(count) = &self.count {
            map.serialize_entry(COUNT_KEY, count)?;
        }
        let mut buf = [0u8; 4];
        for (c, child) in self.sorted_children() {
            let key: &str = c.encode_utf8(&mut buf);
            map.serialize_entry(key, child)?;
        }
        map.end()
    }
}

/// Deserializes one node, tracking depth so a snapshot can never describe a
/// word longer than [`MAX_WORD_CHARS`].
#[derive(Clone, Copy)]
struct NodeSeed {
    depth: usize,
}

impl<'de> DeserializeSeed<'de> for NodeSeed {
    type Value = TrieNode;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<TrieNode, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for NodeSeed {
    type Value = TrieNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a trie node mapping")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TrieNode, A::Error> {
        let mut node = TrieNode::new();
        // A zero count is stored as `None`, so presence is tracked apart.
        let mut seen_count = false;
        while let Some(key) = map.next_key::<String>()? {
            if key == COUNT_KEY {
                if seen_count {
                    return Err(de::Error::duplicate_field(COUNT_KEY));
                }
                seen_count = true;
                let weight: Weight = map.next_value()?;
                node.count = weight.is_positive().then_some(weight);
                continue;
            }

            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) if is_key_char(c) => c,
                _ => {
                    return Err(de::Error::invalid_value(
                        Unexpected::Str(&key),
                        &"a lowercase letter, an apostrophe, or \"_\"",
                    ));
                }
            };
            if self.depth >= MAX_WORD_CHARS {
                return Err(de::Error::custom(format_args!(
                    "snapshot nests deeper than {MAX_WORD_CHARS} characters"
                )));
            }
            let child = map.next_value_seed(NodeSeed {
                depth: self.depth + 1,
            })?;
            if node.insert_child(c, child).is_some() {
                return Err(de::Error::custom(format_args!("duplicate key `{c}`")));
            }
        }
        Ok(node)
    }
}

impl<'de> Deserialize<'de> for TrieNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NodeSeed { depth: 0 }.deserialize(deserializer)
    }
}

// ---------------------------------------------------------------------------
// FrequencyTrie
// ---------------------------------------------------------------------------

impl Serialize for FrequencyTrie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FrequencyTrie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TrieNode::deserialize(deserializer).map(FrequencyTrie::from_root)
    }
}

impl FrequencyTrie {
    /// Encode the trie as compact JSON text.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode the trie as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encode the trie as a JSON value tree.
    pub fn to_value(&self) -> Result<serde_json::Value, SnapshotError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a trie from JSON text.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a trie from a JSON value tree.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        if !value.is_object() {
            return Err(SnapshotError::NotAnObject(value_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// SnapshotInput
// ---------------------------------------------------------------------------

/// Anything a trie can be restored from: a decoded trie, a JSON value tree,
/// or the textual JSON encoding.
#[derive(Debug, Clone)]
pub enum SnapshotInput {
    Trie(FrequencyTrie),
    Value(serde_json::Value),
    Text(String),
}

impl SnapshotInput {
    /// Decode into a trie. Nothing is replaced anywhere until this succeeds.
    pub fn decode(self) -> Result<FrequencyTrie, SnapshotError> {
        match self {
            SnapshotInput::Trie(trie) => Ok(trie),
            SnapshotInput::Value(value) => FrequencyTrie::from_value(value),
            SnapshotInput::Text(text) => FrequencyTrie::from_json(&text),
        }
    }
}

impl From<FrequencyTrie> for SnapshotInput {
    fn from(trie: FrequencyTrie) -> Self {
        SnapshotInput::Trie(trie)
    }
}

impl From<serde_json::Value> for SnapshotInput {
    fn from(value: serde_json::Value) -> Self {
        SnapshotInput::Value(value)
    }
}

impl From<String> for SnapshotInput {
    fn from(text: String) -> Self {
        SnapshotInput::Text(text)
    }
}

impl From<&str> for SnapshotInput {
    fn from(text: &str) -> Self {
        SnapshotInput::Text(text.to_string())
    }
}
