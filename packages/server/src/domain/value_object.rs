//! Value objects.

use std::fmt;

use super::{error::ValueObjectError, name_resolver::resolve_display_name};

/// Position of a room inside the room registry.
///
/// Positions shift when a room before them is removed, so a `RoomIndex` is only
/// meaningful against the registry snapshot it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomIndex(usize);

impl RoomIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Parse a room reference taken from a request path.
    ///
    /// Only canonical decimal integers are accepted: no sign, no whitespace and
    /// no leading zeros other than `"0"` itself. A position too large for `usize`
    /// saturates to `usize::MAX`, which is never inside the registry.
    pub fn parse(room_ref: &str) -> Result<Self, ValueObjectError> {
        let has_leading_zero = room_ref.len() > 1 && room_ref.starts_with('0');
        if room_ref.is_empty()
            || has_leading_zero
            || !room_ref.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValueObjectError::InvalidRoomRef(room_ref.to_string()));
        }
        Ok(Self(room_ref.parse::<usize>().unwrap_or(usize::MAX)))
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name assigned to a registered connection
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(&'static str);

impl DisplayName {
    /// Resolve the display name for a client network address
    pub fn from_address(address: &str) -> Self {
        Self(resolve_display_name(address))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn into_string(self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_index_parse_valid() {
        // テスト項目: 数字のみの参照は位置として解釈される
        // when (操作):
        let zero = RoomIndex::parse("0");
        let twelve = RoomIndex::parse("12");

        // then (期待する結果):
        assert_eq!(zero, Ok(RoomIndex::new(0)));
        assert_eq!(twelve, Ok(RoomIndex::new(12)));
    }

    #[test]
    fn test_room_index_parse_rejects_non_numeric() {
        // テスト項目: 数字以外を含む参照はエラーになる
        for input in ["", "abc", "-1", "+1", " 1", "1.5", "0x10", "general", "00", "01"] {
            // when (操作):
            let result = RoomIndex::parse(input);

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ValueObjectError::InvalidRoomRef(input.to_string())),
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_room_index_parse_saturates_on_overflow() {
        // テスト項目: usize に収まらない位置は usize::MAX として扱われる
        // given (前提条件):
        let huge = "99999999999999999999999999999999";

        // when (操作):
        let result = RoomIndex::parse(huge);

        // then (期待する結果):
        assert_eq!(result, Ok(RoomIndex::new(usize::MAX)));
    }

    #[test]
    fn test_display_name_from_address_is_stable() {
        // テスト項目: 同じアドレスからは同じ表示名が得られる
        // when (操作):
        let first = DisplayName::from_address("127.0.0.1");
        let second = DisplayName::from_address("127.0.0.1");

        // then (期待する結果):
        assert_eq!(first, second);
        assert_eq!(first.into_string(), second.as_str());
    }
}
