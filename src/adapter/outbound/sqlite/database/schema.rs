// SQLite INTEGER columns hold 64-bit values; map them as BigInt.

diesel::table! {
    students (id) {
        id -> BigInt,
        name -> Text,
        age -> BigInt,
        grade -> Text,
    }
}
