//! Struct field encoding.
//!
//! Every struct field is serialized through [`FieldSerializer`] instead of the
//! plain value serializer. It produces the same [`Value`] but also records
//! whether the field carries the omission policy and whether its value is
//! empty. The struct serializers use that to decide if the member is written.
//!
//! Only the outermost layer of the field value is inspected: the payload of
//! a sequence, map, struct or enum variant is encoded with
//! [`ValueSerializer`], so a zero-state signal inside it is a plain value and
//! never reaches the enclosing struct.

use crate::ser::{SerializeMap, SerializeVec, ValueSerializer};
use crate::value::is_big_number;
use crate::{empty, omitempty, Error, Result, Value};
use serde::ser::{self, Serializer as _};
use serde::Serialize;

/// Why a field value counts as empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Emptiness {
    Present,
    /// `false`, zero, `""`, null or an empty collection.
    Intrinsic,
    /// The value reported its own zero state.
    Signalled,
}

impl Emptiness {
    fn intrinsic_if(empty: bool) -> Self {
        if empty {
            Emptiness::Intrinsic
        } else {
            Emptiness::Present
        }
    }
}

/// The encoded form of one struct field.
#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) value: Value,
    pub(crate) emptiness: Emptiness,
    pub(crate) omit_empty: bool,
}

impl Field {
    fn new(value: Value, emptiness: Emptiness) -> Self {
        Field {
            value,
            emptiness,
            omit_empty: false,
        }
    }

    /// Returns the value to write, or `None` if the field must be dropped.
    pub(crate) fn into_emitted(self, key: &str) -> Option<Value> {
        if self.omit_empty && self.emptiness != Emptiness::Present {
            tracing::trace!(field = key, emptiness = ?self.emptiness, "omitting empty field");
            None
        } else {
            Some(self.value)
        }
    }
}

/// Encodes `value` as a struct field and applies the omission policy.
pub(crate) fn encode_field<T>(key: &str, value: &T) -> Result<Option<Value>>
where
    T: ?Sized + Serialize,
{
    Ok(value.serialize(FieldSerializer)?.into_emitted(key))
}

pub(crate) struct FieldSerializer;

impl ser::Serializer for FieldSerializer {
    type Ok = Field;
    type Error = Error;

    type SerializeSeq = FieldCompound<SerializeVec>;
    type SerializeTuple = FieldCompound<SerializeVec>;
    type SerializeTupleStruct = FieldCompound<SerializeVec>;
    type SerializeTupleVariant = FieldCompound<SerializeVec>;
    type SerializeMap = FieldCompound<SerializeMap>;
    type SerializeStruct = FieldCompound<SerializeMap>;
    type SerializeStructVariant = FieldCompound<SerializeMap>;

    fn serialize_bool(self, v: bool) -> Result<Field> {
        Ok(Field::new(Value::Bool(v), Emptiness::intrinsic_if(!v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Field> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Field> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Field> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Field> {
        Ok(Field::new(Value::from(v), Emptiness::intrinsic_if(v == 0)))
    }

    fn serialize_i128(self, v: i128) -> Result<Field> {
        Ok(Field::new(Value::from(v), Emptiness::intrinsic_if(v == 0)))
    }

    fn serialize_u8(self, v: u8) -> Result<Field> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Field> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Field> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Field> {
        Ok(Field::new(Value::from(v), Emptiness::intrinsic_if(v == 0)))
    }

    fn serialize_u128(self, v: u128) -> Result<Field> {
        Ok(Field::new(Value::from(v), Emptiness::intrinsic_if(v == 0)))
    }

    fn serialize_f32(self, v: f32) -> Result<Field> {
        let value = ValueSerializer.serialize_f32(v)?;
        Ok(Field::new(value, Emptiness::intrinsic_if(v == 0.0)))
    }

    fn serialize_f64(self, v: f64) -> Result<Field> {
        let value = ValueSerializer.serialize_f64(v)?;
        Ok(Field::new(value, Emptiness::intrinsic_if(v == 0.0)))
    }

    fn serialize_char(self, v: char) -> Result<Field> {
        Ok(Field::new(Value::String(v.to_string()), Emptiness::Present))
    }

    fn serialize_str(self, v: &str) -> Result<Field> {
        Ok(Field::new(Value::from(v), Emptiness::intrinsic_if(v.is_empty())))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Field> {
        let value = ValueSerializer.serialize_bytes(v)?;
        Ok(Field::new(value, Emptiness::intrinsic_if(v.is_empty())))
    }

    fn serialize_none(self) -> Result<Field> {
        Ok(Field::new(Value::Null, Emptiness::Intrinsic))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Field>
    where
        T: ?Sized + Serialize,
    {
        // `Some` is set even when its payload is a zero; only a signal survives.
        let mut field = value.serialize(self)?;
        if field.emptiness == Emptiness::Intrinsic {
            field.emptiness = Emptiness::Present;
        }
        Ok(field)
    }

    fn serialize_unit(self) -> Result<Field> {
        Ok(Field::new(Value::Null, Emptiness::Intrinsic))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Field> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<Field> {
        let value = ValueSerializer.serialize_unit_variant(name, variant_index, variant)?;
        Ok(Field::new(value, Emptiness::Present))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Field>
    where
        T: ?Sized + Serialize,
    {
        if empty::is_empty_signal(name) {
            // The zero representation itself is encoded outside field context.
            let value = value.serialize(ValueSerializer)?;
            Ok(Field::new(value, Emptiness::Signalled))
        } else if is_big_number(name) {
            let value = ValueSerializer.serialize_newtype_struct(name, value)?;
            Ok(Field::new(value, Emptiness::Present))
        } else if omitempty::is_omit_empty(name) {
            let mut field = value.serialize(self)?;
            field.omit_empty = true;
            Ok(field)
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
    ) -> Result<Field>
    where
        T: ?Sized + Serialize,
    {
        let value = ValueSerializer.serialize_newtype_variant(name, variant_index, variant, value)?;
        Ok(Field::new(value, Emptiness::Present))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(FieldCompound::emptiable(ValueSerializer.serialize_seq(len)?))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(FieldCompound::emptiable(ValueSerializer.serialize_tuple(len)?))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(FieldCompound::present(
            ValueSerializer.serialize_tuple_struct(name, len)?,
        ))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(FieldCompound::present(
            ValueSerializer.serialize_tuple_variant(name, variant_index, variant, len)?,
        ))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(FieldCompound::emptiable(ValueSerializer.serialize_map(len)?))
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(FieldCompound::present(
            ValueSerializer.serialize_struct(name, len)?,
        ))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(FieldCompound::present(
            ValueSerializer.serialize_struct_variant(name, variant_index, variant, len)?,
        ))
    }
}

/// A compound field value: buffers through the value serializer and counts
/// entries so an empty sequence or map can be recognised.
pub(crate) struct FieldCompound<C> {
    inner: C,
    len: usize,
    emptiable: bool,
}

impl<C> FieldCompound<C> {
    fn emptiable(inner: C) -> Self {
        FieldCompound {
            inner,
            len: 0,
            emptiable: true,
        }
    }

    fn present(inner: C) -> Self {
        FieldCompound {
            inner,
            len: 0,
            emptiable: false,
        }
    }

    fn finish(len: usize, emptiable: bool, value: Value) -> Field {
        Field::new(value, Emptiness::intrinsic_if(emptiable && len == 0))
    }
}

impl<C> ser::SerializeSeq for FieldCompound<C>
where
    C: ser::SerializeSeq<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_element(value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeTuple for FieldCompound<C>
where
    C: ser::SerializeTuple<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_element(value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeTupleStruct for FieldCompound<C>
where
    C: ser::SerializeTupleStruct<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_field(value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeTupleVariant for FieldCompound<C>
where
    C: ser::SerializeTupleVariant<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_field(value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeMap for FieldCompound<C>
where
    C: ser::SerializeMap<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_key(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.serialize_value(value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeStruct for FieldCompound<C>
where
    C: ser::SerializeStruct<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_field(key, value)
    }

    fn skip_field(&mut self, key: &'static str) -> Result<()> {
        self.inner.skip_field(key)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}

impl<C> ser::SerializeStructVariant for FieldCompound<C>
where
    C: ser::SerializeStructVariant<Ok = Value, Error = Error>,
{
    type Ok = Field;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.len += 1;
        self.inner.serialize_field(key, value)
    }

    fn end(self) -> Result<Field> {
        Ok(Self::finish(self.len, self.emptiable, self.inner.end()?))
    }
}
