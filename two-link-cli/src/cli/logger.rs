use serde::ser::{self, Serialize};
use std::io::Write;

#[derive(Debug)]
pub(crate) struct Error(std::io::Error);

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self(std::io::Error::other(msg.to_string()))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}

type SerResult = Result<(), Error>;

// A TOML-like result printer: `[title]` headers, `key=value` lines,
// floats with 4 decimals and sequences as `(a, b)`
pub(crate) struct Logger<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> Logger<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub(crate) fn top_title(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.writer, "[{title}]")
    }

    pub(crate) fn title(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.writer, "\n[{title}]")
    }

    pub(crate) fn line(&mut self, s: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.writer, "{s}")
    }

    pub(crate) fn newline(&mut self) -> std::io::Result<()> {
        writeln!(self.writer)
    }

    pub(crate) fn log<S: Serialize>(&mut self, s: S) -> std::io::Result<()> {
        s.serialize(self).map_err(|e| e.0)
    }

    pub(crate) fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

macro_rules! impl_disp_methods {
    ($(($method:ident, $ty:ty)),+ $(,)?) => {$(
        fn $method(self, v: $ty) -> SerResult {
            Ok(write!(self.writer, "{v}")?)
        }
    )+};
}

impl<'a, 'b, W: Write> ser::Serializer for &'a mut Logger<'b, W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Seq<'a, 'b, W>;
    type SerializeTuple = Seq<'a, 'b, W>;
    type SerializeTupleStruct = Seq<'a, 'b, W>;
    type SerializeTupleVariant = Seq<'a, 'b, W>;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    impl_disp_methods!(
        (serialize_bool, bool),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_char, char),
        (serialize_str, &str),
        (serialize_unit_struct, &'static str),
    );

    fn serialize_f32(self, v: f32) -> SerResult {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> SerResult {
        Ok(write!(self.writer, "{v:.04}")?)
    }

    fn serialize_bytes(self, v: &[u8]) -> SerResult {
        v.serialize(self)
    }

    fn serialize_none(self) -> SerResult {
        Ok(write!(self.writer, "-")?)
    }

    fn serialize_some<T>(self, value: &T) -> SerResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> SerResult {
        Ok(())
    }

    fn serialize_unit_variant(self, _name: &'static str, _index: u32, variant: &'static str) -> SerResult {
        Ok(write!(self.writer, "{variant}")?)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> SerResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> SerResult
    where
        T: ?Sized + Serialize,
    {
        write!(self.writer, "{variant}")?;
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Seq::open(self, "")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Error> {
        Seq::open(self, "")
    }

    fn serialize_tuple_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeTupleStruct, Error> {
        Seq::open(self, name)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Seq::open(self, variant)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct, Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Ok(self)
    }
}

pub(crate) struct Seq<'a, 'b, W: Write> {
    logger: &'a mut Logger<'b, W>,
    first: bool,
}

impl<'a, 'b, W: Write> Seq<'a, 'b, W> {
    fn open(logger: &'a mut Logger<'b, W>, prefix: &str) -> Result<Self, Error> {
        write!(logger.writer, "{prefix}(")?;
        Ok(Self { logger, first: true })
    }

    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> SerResult {
        if !std::mem::take(&mut self.first) {
            write!(self.logger.writer, ", ")?;
        }
        value.serialize(&mut *self.logger)
    }

    fn close(self) -> SerResult {
        Ok(write!(self.logger.writer, ")")?)
    }
}

macro_rules! impl_ser_seq {
    ($(($ty:ident, $method:ident)),+ $(,)?) => {$(
        impl<W: Write> ser::$ty for Seq<'_, '_, W> {
            type Ok = ();
            type Error = Error;

            fn $method<T>(&mut self, value: &T) -> SerResult
            where
                T: ?Sized + Serialize,
            {
                self.element(value)
            }

            fn end(self) -> SerResult {
                self.close()
            }
        }
    )+};
}

impl_ser_seq!(
    (SerializeSeq, serialize_element),
    (SerializeTuple, serialize_element),
    (SerializeTupleStruct, serialize_field),
    (SerializeTupleVariant, serialize_field),
);

impl<W: Write> ser::SerializeMap for &mut Logger<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> SerResult
    where
        T: ?Sized + Serialize,
    {
        key.serialize(&mut **self)?;
        Ok(write!(self.writer, "=")?)
    }

    fn serialize_value<T>(&mut self, value: &T) -> SerResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut **self)?;
        Ok(writeln!(self.writer)?)
    }

    fn end(self) -> SerResult {
        Ok(())
    }
}

macro_rules! impl_ser_struct {
    ($($ty:ident),+ $(,)?) => {$(
        impl<W: Write> ser::$ty for &mut Logger<'_, W> {
            type Ok = ();
            type Error = Error;

            fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> SerResult
            where
                T: ?Sized + Serialize,
            {
                write!(self.writer, "{key}=")?;
                value.serialize(&mut **self)?;
                Ok(writeln!(self.writer)?)
            }

            fn end(self) -> SerResult {
                Ok(())
            }
        }
    )+};
}

impl_ser_struct!(SerializeStruct, SerializeStructVariant);
