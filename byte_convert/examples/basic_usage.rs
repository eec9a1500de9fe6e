//! Writes a small record with the codec and reads it back field by field.

use byte_convert::{Char16, FromByteArray, IS_LITTLE_ENDIAN, ToByteArray, codec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    assert!(IS_LITTLE_ENDIAN);

    let name = codec::encode_text("sensor-7")?;

    let mut buf = Vec::new();
    buf.extend_from_slice(&42u32.to_byte_array());
    buf.extend_from_slice(&(-17i16).to_byte_array());
    buf.extend_from_slice(&21.5f64.to_byte_array());
    buf.extend_from_slice(&true.to_byte_array());

    let degree = Char16::try_from('°').map_err(|c| format!("{c} needs two code units"))?;
    buf.extend_from_slice(&degree.to_byte_array());
    buf.extend_from_slice(&name);

    println!("encoded {} bytes: {:02x?}", buf.len(), buf);

    let mut at = 0;
    let id = u32::from_byte_array_at(&buf, at)?;
    at += u32::WIDTH;
    let offset = i16::from_byte_array_at(&buf, at)?;
    at += i16::WIDTH;
    let reading = f64::from_byte_array_at(&buf, at)?;
    at += f64::WIDTH;
    let active = bool::from_byte_array_at(&buf, at)?;
    at += bool::WIDTH;
    let unit = char::try_from(Char16::from_byte_array_at(&buf, at)?)?;
    at += Char16::WIDTH;
    let label = codec::decode_text_range(&buf, at, buf.len())?;

    println!("id={id} offset={offset} reading={reading}{unit} active={active} label={label}");

    // a read that runs off the end keeps the bytes it has
    let tail = u64::from_byte_array_at(&buf, buf.len() - 2)?;
    println!("last two bytes as u64: {tail:#x}");

    Ok(())
}
