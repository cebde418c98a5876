//! Deterministic mapping from an arbitrary string to a human display name.

/// Fixed table of display names handed out to registered connections.
pub const NAMES: [&str; 200] = [
    "Michael", "Christopher", "Jessica", "Matthew", "Ashley", "Jennifer", "Joshua",
    "Amanda", "Daniel", "David", "James", "Robert", "John", "Joseph", "Andrew", "Ryan",
    "Brandon", "Jason", "Justin", "Sarah", "William", "Jonathan", "Stephanie", "Brian",
    "Nicole", "Nicholas", "Anthony", "Heather", "Eric", "Elizabeth", "Adam", "Megan",
    "Melissa", "Kevin", "Steven", "Thomas", "Timothy", "Christina", "Kyle", "Rachel",
    "Laura", "Lauren", "Amber", "Brittany", "Danielle", "Richard", "Kimberly", "Jeffrey",
    "Amy", "Crystal", "Michelle", "Tiffany", "Jeremy", "Benjamin", "Mark", "Emily", "Aaron",
    "Charles", "Rebecca", "Jacob", "Stephen", "Patrick", "Sean", "Erin", "Zachary", "Jamie",
    "Kelly", "Samantha", "Nathan", "Sara", "Dustin", "Paul", "Angela", "Tyler", "Scott",
    "Katherine", "Andrea", "Gregory", "Erica", "Mary", "Travis", "Lisa", "Kenneth", "Bryan",
    "Lindsey", "Kristen", "Jose", "Alexander", "Jesse", "Katie", "Lindsay", "Shannon",
    "Vanessa", "Courtney", "Christine", "Alicia", "Cody", "Allison", "Bradley", "Samuel",
    "Shawn", "April", "Derek", "Kathryn", "Kristin", "Chad", "Jenna", "Tara", "Maria",
    "Krystal", "Jared", "Anna", "Edward", "Julie", "Peter", "Holly", "Marcus", "Kristina",
    "Natalie", "Jordan", "Victoria", "Jacqueline", "Corey", "Keith", "Monica", "Juan",
    "Donald", "Cassandra", "Meghan", "Joel", "Shane", "Phillip", "Patricia", "Brett",
    "Ronald", "Catherine", "George", "Antonio", "Cynthia", "Stacy", "Kathleen", "Raymond",
    "Carlos", "Brandi", "Douglas", "Nathaniel", "Ian", "Craig", "Brandy", "Alex", "Valerie",
    "Veronica", "Cory", "Whitney", "Gary", "Derrick", "Philip", "Luis", "Diana", "Chelsea",
    "Leslie", "Caitlin", "Leah", "Natasha", "Erika", "Casey", "Latoya", "Erik", "Dana",
    "Victor", "Brent", "Dominique", "Frank", "Brittney", "Evan", "Gabriel", "Julia",
    "Candice", "Karen", "Melanie", "Adrian", "Stacey", "Margaret", "Sheena", "Wesley",
    "Vincent", "Alexandra", "Katrina", "Bethany", "Nichole", "Larry", "Jeffery", "Curtis",
    "Carrie", "Todd", "Blake", "Christian", "Randy", "Dennis", "Alison",
];

/// 32-bit string hash over UTF-16 code units.
///
/// Computes `hash = hash * 31 + unit` with wrapping arithmetic, starting from 0.
pub fn hash_code(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Index into [`NAMES`] for a hash value.
///
/// Uses the unsigned magnitude so that `i32::MIN` maps to `2^31` instead of
/// overflowing.
pub fn name_index(hash: i32) -> usize {
    hash.unsigned_abs() as usize % NAMES.len()
}

/// Resolve the display name for `input`.
///
/// The same input always yields the same name. Different inputs may collide.
pub fn resolve_display_name(input: &str) -> &'static str {
    NAMES[name_index(hash_code(input))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_code_of_empty_string_is_zero() {
        assert_eq!(hash_code(""), 0);
    }

    #[test]
    fn test_hash_code_known_values() {
        // テスト項目: 既知の入力に対するハッシュ値が一致する
        assert_eq!(hash_code("a"), 97);
        assert_eq!(hash_code("hello"), 99162322);
        assert_eq!(hash_code("127.0.0.1"), 1505998205);
        assert_eq!(hash_code("::1"), 57585);
    }

    #[test]
    fn test_hash_code_uses_utf16_code_units() {
        // テスト項目: BMP 外の文字はサロゲートペアとしてハッシュされる
        assert_eq!(hash_code("日本"), 835047);
        assert_eq!(hash_code("😀"), 1772899);
    }

    #[test]
    fn test_hash_code_wraps_on_overflow() {
        // given (前提条件): 32 bit を超える長い入力
        let input = "a".repeat(64);

        // when (操作):
        let expected = input
            .bytes()
            .fold(0i64, |hash, b| ((hash * 31 + i64::from(b)) as i32) as i64);

        // then (期待する結果):
        assert_eq!(i64::from(hash_code(&input)), expected);
    }

    #[test]
    fn test_name_index_handles_min_value() {
        // テスト項目: i32::MIN の絶対値 2^31 を 200 で割った余りになる
        assert_eq!(name_index(i32::MIN), 48);
        assert_eq!(name_index(-97), 97);
        assert_eq!(name_index(0), 0);
    }

    #[test]
    fn test_resolve_display_name_known_addresses() {
        assert_eq!(resolve_display_name(""), "Michael");
        assert_eq!(resolve_display_name("127.0.0.1"), "Jennifer");
        assert_eq!(resolve_display_name("192.168.1.10"), "Robert");
        assert_eq!(resolve_display_name("::1"), "Vincent");
    }

    #[test]
    fn test_resolve_display_name_is_deterministic_and_in_table() {
        // テスト項目: 同じ入力は同じ名前になり、常にテーブル内の名前が返る
        for i in 0..500 {
            // given (前提条件):
            let address = format!("10.0.{}.{}", i / 256, i % 256);

            // when (操作):
            let first = resolve_display_name(&address);
            let second = resolve_display_name(&address.clone());

            // then (期待する結果):
            assert_eq!(first, second);
            assert!(NAMES.contains(&first));
        }
    }

    #[test]
    fn test_names_table_has_no_duplicates() {
        let mut sorted = NAMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), NAMES.len());
    }
}
