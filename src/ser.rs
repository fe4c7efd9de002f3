//! JSON serialization.
//!
//! This module provides the [`Serializer`] that writes JSON text and the
//! [`ValueSerializer`] that builds a [`Value`] tree.
//!
//! ## Overview
//!
//! Scalars are written straight to the output. Sequences, maps, structs and
//! enum payloads are first buffered as a [`Value`] and then written in one
//! pass, so that a struct can drop a member before anything of it has been
//! written.
//!
//! Struct fields go through the field serializer (see [`crate::omitempty`]);
//! everything else is encoded as a plain value, which makes the zero-state
//! signal of [`crate::empty`] a no-op outside struct fields.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_omitjson::{JsonOptions, Serializer};
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new(JsonOptions::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "[1,2,3]");
//! ```

use crate::field::encode_field;
use crate::value::is_big_number;
use crate::{Error, JsonOptions, Map, Number, Result, Value};
use num_bigint::BigInt;
use serde::ser::{self, Serializer as _};
use serde::Serialize;
use std::fmt::Write as _;

/// The JSON serializer.
///
/// Converts Rust values implementing `Serialize` into JSON text.
/// Created via [`Serializer::new`] with customizable options.
pub struct Serializer {
    output: String,
    options: JsonOptions,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_buffered(&mut self, value: &Value) {
        write_value(&mut self.output, value, &self.options, 0);
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a, SerializeVec>;
    type SerializeTuple = Compound<'a, SerializeVec>;
    type SerializeTupleStruct = Compound<'a, SerializeVec>;
    type SerializeTupleVariant = Compound<'a, SerializeVec>;
    type SerializeMap = Compound<'a, SerializeMap>;
    type SerializeStruct = Compound<'a, SerializeMap>;
    type SerializeStructVariant = Compound<'a, SerializeMap>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        write!(self.output, "{}", v).map_err(Error::custom)
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        write!(self.output, "{}", v).map_err(Error::custom)
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        write!(self.output, "{}", v).map_err(Error::custom)
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        write!(self.output, "{}", v).map_err(Error::custom)
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(widen_f32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        let number = finite_number(v)?;
        write!(self.output, "{}", number).map_err(Error::custom)
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut buf = [0; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        write_string(&mut self.output, v, &self.options);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.output.push_str("null");
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    /// Newtype structs are transparent, including the zero-state signal and
    /// the omission policy: neither has any effect on a top-level value.
    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        if is_big_number(name) {
            let value = ValueSerializer.serialize_newtype_struct(name, value)?;
            self.write_buffered(&value);
            Ok(())
        } else {
            value.serialize(self)
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let value = ValueSerializer.serialize_newtype_variant(name, variant_index, variant, value)?;
        self.write_buffered(&value);
        Ok(())
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_seq(len)?,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_tuple(len)?,
        })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_tuple_struct(name, len)?,
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_tuple_variant(name, variant_index, variant, len)?,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_map(len)?,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_struct(name, len)?,
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(Compound {
            ser: self,
            inner: ValueSerializer.serialize_struct_variant(name, variant_index, variant, len)?,
        })
    }
}

/// A compound value being buffered for the text serializer.
pub struct Compound<'a, C> {
    ser: &'a mut Serializer,
    inner: C,
}

impl<'a> ser::SerializeSeq for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeSeq::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeTuple::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeTuple::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeTupleStruct::serialize_field(&mut self.inner, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeTupleStruct::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeTupleVariant::serialize_field(&mut self.inner, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeTupleVariant::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeMap for Compound<'a, SerializeMap> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeMap::serialize_key(&mut self.inner, key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeMap::serialize_value(&mut self.inner, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeMap::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for Compound<'a, SerializeMap> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeStruct::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for Compound<'a, SerializeMap> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStructVariant::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        let value = ser::SerializeStructVariant::end(self.inner)?;
        self.ser.write_buffered(&value);
        Ok(())
    }
}

/// Serializer that builds a [`Value`] tree. Used by [`crate::to_value`].
#[derive(Clone, Copy)]
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(widen_f32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(finite_number(v)?))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v.iter().map(|&b| Value::from(b)).collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        if is_big_number(name) {
            match value.serialize(self)? {
                Value::String(digits) => digits
                    .parse::<BigInt>()
                    .map(|n| Value::Number(Number::Big(n)))
                    .map_err(|e| Error::custom(format!("invalid big integer {:?}: {}", digits, e))),
                other => Ok(other),
            }
        } else {
            value.serialize(self)
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
            variant,
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn into_value(self) -> Value {
        let array = Value::Array(self.vec);
        match self.variant {
            Some(variant) => tagged(variant, array),
            None => array,
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: Map::with_capacity(capacity),
            current_key: None,
            variant,
        }
    }

    /// Struct members go through the field serializer so omitted fields
    /// never enter the map.
    fn push_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        if let Some(value) = encode_field(key, value)? {
            self.map.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn into_value(self) -> Value {
        let object = Value::Object(self.map);
        match self.variant {
            Some(variant) => tagged(variant, object),
            None => object,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_to_string(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_field(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.into_value())
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Widens through the shortest decimal form, so `0.1f32` stays `0.1`.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or(v as f64)
}

fn finite_number(v: f64) -> Result<Number> {
    if v.is_finite() {
        Ok(Number::Float(v))
    } else {
        Err(Error::unsupported_value(&v.to_string()))
    }
}

/// Externally tagged enum payload: `{"Variant": value}`.
fn tagged(variant: &'static str, value: Value) -> Value {
    let mut object = Map::with_capacity(1);
    object.insert(variant.to_string(), value);
    Value::Object(object)
}

fn key_to_string<T: Serialize + ?Sized>(key: &T) -> Result<String> {
    match to_value(key)? {
        Value::String(s) => Ok(s),
        Value::Number(n) if n.is_integer() => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Error::key_must_be_string("null")),
        Value::Number(_) => Err(Error::key_must_be_string("float")),
        Value::Array(_) => Err(Error::key_must_be_string("array")),
        Value::Object(_) => Err(Error::key_must_be_string("object")),
    }
}

pub(crate) fn write_value(output: &mut String, value: &Value, options: &JsonOptions, depth: usize) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(output, "{}", n);
        }
        Value::String(s) => write_string(output, s, options),
        Value::Array(arr) => {
            if arr.is_empty() {
                output.push_str("[]");
                return;
            }

            output.push('[');
            for (i, element) in arr.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_line_start(output, options, depth + 1);
                write_value(output, element, options, depth + 1);
            }
            write_line_start(output, options, depth);
            output.push(']');
        }
        Value::Object(obj) => {
            if obj.is_empty() {
                output.push_str("{}");
                return;
            }

            output.push('{');
            for (i, (key, member)) in obj.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_line_start(output, options, depth + 1);
                write_string(output, key, options);
                output.push(':');
                if options.pretty {
                    output.push(' ');
                }
                write_value(output, member, options, depth + 1);
            }
            write_line_start(output, options, depth);
            output.push('}');
        }
    }
}

#[inline]
fn write_line_start(output: &mut String, options: &JsonOptions, depth: usize) {
    if options.pretty {
        output.push('\n');
        output.push_str(&" ".repeat(depth * options.indent));
    }
}

fn write_string(output: &mut String, s: &str, options: &JsonOptions) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(output, "\\u{:04x}", c as u32);
            }
            '<' | '>' | '&' | '\u{2028}' | '\u{2029}' if options.escape_html => {
                let _ = write!(output, "\\u{:04x}", ch as u32);
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
}
