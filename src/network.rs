use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Taille maximale acceptée pour un message reçu (1 Mio).
pub const MAX_FRAME_LEN: u32 = 1 << 20;

/// Envoie un message : taille sur 4 octets (little endian) puis le contenu UTF-8.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = u32::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "message too large for a u32 frame")
    })?;
    stream.write_u32::<LittleEndian>(size)?;
    stream.write_all(message_bytes)?;
    stream.flush()
}

/// Reçoit un message encadré par sa taille.
///
/// Une taille annoncée au-delà de [`MAX_FRAME_LEN`] est refusée avant toute
/// allocation (`InvalidData`), le contenu n'est alors pas lu.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    if size > MAX_FRAME_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("frame of {} bytes exceeds the {} bytes limit", size, MAX_FRAME_LEN),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e))
    })
}
