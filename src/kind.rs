//! Classify values by the shape they take in the serde data model.
//!
//! Only the outermost layer is inspected: a struct reports `Record` without
//! visiting its fields. `Option::Some`, boxes and newtype structs are
//! transparent, `None` and `()` are `Nil`.

use serde::ser::{self, Serialize, Serializer};
use tracing::debug;

use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Record,
    Mapping,
    Sequence,
    String,
    Scalar,
    Nil,
}

impl Kind {
    /// Kinds that can be diffed field by field or line by line.
    pub fn is_structured(self) -> bool {
        matches!(self, Kind::Record | Kind::Mapping | Kind::Sequence | Kind::String)
    }
}

/// Outer shape of a value; strings keep their contents for line diffs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Shape {
    Text(String),
    Other(Kind),
}

impl Shape {
    pub(crate) fn of<T: Serialize + ?Sized>(value: &T) -> Shape {
        value.serialize(Probe).unwrap_or_else(|err| {
            debug!(%err, "kind probe refused, treating value as scalar");
            Shape::Other(Kind::Scalar)
        })
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Shape::Text(_) => Kind::String,
            Shape::Other(kind) => *kind,
        }
    }
}

/// The kind of `value`.
pub fn kind_of<T: Serialize + ?Sized>(value: &T) -> Kind {
    Shape::of(value).kind()
}

struct Probe;

/// Accepts and ignores the members of a compound value.
struct Members(Kind);

macro_rules! scalar {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, _v: $ty) -> Result<Shape, Error> {
                Ok(Shape::Other(Kind::Scalar))
            }
        )*
    };
}

impl Serializer for Probe {
    type Ok = Shape;
    type Error = Error;
    type SerializeSeq = Members;
    type SerializeTuple = Members;
    type SerializeTupleStruct = Members;
    type SerializeTupleVariant = Members;
    type SerializeMap = Members;
    type SerializeStruct = Members;
    type SerializeStructVariant = Members;

    scalar! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
    }

    fn serialize_str(self, v: &str) -> Result<Shape, Error> {
        Ok(Shape::Text(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Sequence))
    }

    fn serialize_none(self) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Nil))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Shape, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Nil))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Record))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Scalar))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Shape, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Shape, Error> {
        Ok(Shape::Other(Kind::Record))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Members, Error> {
        Ok(Members(Kind::Sequence))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Members, Error> {
        Ok(Members(Kind::Sequence))
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Members, Error> {
        Ok(Members(Kind::Record))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Members, Error> {
        Ok(Members(Kind::Record))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Members, Error> {
        Ok(Members(Kind::Mapping))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Members, Error> {
        Ok(Members(Kind::Record))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Members, Error> {
        Ok(Members(Kind::Record))
    }
}

impl ser::SerializeSeq for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeTuple for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeTupleStruct for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeTupleVariant for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeMap for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, _key: &T) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeStruct for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}

impl ser::SerializeStructVariant for Members {
    type Ok = Shape;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Shape, Error> {
        Ok(Shape::Other(self.0))
    }
}
