use tagged_endian::prelude::*;

#[derive(Plain, Clone, Copy, Debug, PartialEq)]
#[repr(C)]
struct RecordHeader {
    magic: u32_be,
    version: u16_le,
    kind: u8,
    flags: u8,
    length: u64_be,
}

#[derive(Plain, Clone, Copy, Debug)]
#[repr(C, packed)]
struct PackedEntry {
    tag: u8,
    offset: Unaligned<u32_le>,
    size: Unaligned<u16_be>,
}

#[derive(Plain, Clone, Copy)]
#[repr(transparent)]
struct Checksum(u32_le);

#[derive(Plain, Clone, Copy)]
#[repr(C)]
struct Table {
    header: RecordHeader,
    checksums: [Checksum; 2],
}

const HEADER_BYTES: [u8; 16] = [
    0x7F, 0x45, 0x4C, 0x46, // magic
    0x02, 0x00, // version
    0x03, // kind
    0x80, // flags
    0, 0, 0, 0, 0, 0, 0x01, 0x00, // length
];

#[test]
fn test_struct_layout_matches_fields() {
    assert_eq!(core::mem::size_of::<RecordHeader>(), 16);
    assert_eq!(core::mem::size_of::<PackedEntry>(), 7);
    assert_eq!(core::mem::align_of::<PackedEntry>(), 1);
    assert_eq!(core::mem::size_of::<Table>(), 24);
}

#[test]
fn test_read_header_from_bytes() {
    let header = RecordHeader::read_from(&HEADER_BYTES).unwrap();
    assert_eq!(header.magic.to_native(), 0x7F45_4C46);
    assert_eq!(header.version, 2u16);
    assert_eq!(header.kind, 3);
    assert_eq!(header.flags, 0x80);
    assert_eq!(header.length.to_native(), 256);
}

#[test]
fn test_overlay_and_modify_in_place() {
    let mut buf = AlignedBytes::<8, 16>::from_bytes(HEADER_BYTES);
    {
        let header = RecordHeader::mut_from_bytes(&mut buf[..]).unwrap();
        header.length += 1u64;
        header.version.increment();
    }
    assert_eq!(&buf[4..6], &[0x03, 0x00]);
    assert_eq!(&buf[8..], &[0, 0, 0, 0, 0, 0, 0x01, 0x01]);

    let header = RecordHeader::ref_from_bytes(&buf[..]).unwrap();
    assert_eq!(header.length.to_native(), 257);
}

#[test]
fn test_write_round_trips_bytes() {
    let header = RecordHeader::read_from(&HEADER_BYTES).unwrap();
    let mut out = [0u8; 16];
    header.write_to(&mut out).unwrap();
    assert_eq!(out, HEADER_BYTES);
    assert_eq!(header.as_bytes(), &HEADER_BYTES);
}

#[test]
fn test_packed_struct_at_odd_offset() {
    let bytes = [0xAA, 0x09, 0x10, 0x00, 0x00, 0x00, 0x01, 0x02];
    let entry = PackedEntry::ref_from_bytes(&bytes[1..]).unwrap();
    let tag = entry.tag;
    assert_eq!(tag, 0x09);
    assert_eq!(entry.offset.to_native(), 0x10);
    assert_eq!(entry.size.to_native(), 0x0102);
}

#[test]
fn test_nested_structs_and_arrays() {
    let mut table = Table {
        header: RecordHeader::read_from(&HEADER_BYTES).unwrap(),
        checksums: [Checksum(u32_le::new(1)), Checksum(u32_le::new(0x0A0B_0C0D))],
    };
    assert_eq!(&table.as_bytes()[16..], &[1, 0, 0, 0, 0x0D, 0x0C, 0x0B, 0x0A]);

    table.as_bytes_mut()[16] = 2;
    assert_eq!(table.checksums[0].0, 2u32);
}

#[test]
fn test_wrong_size_is_rejected() {
    assert_eq!(
        RecordHeader::read_from(&HEADER_BYTES[..15]),
        Err(LayoutError::Size {
            expected: 16,
            actual: 15
        })
    );
}
