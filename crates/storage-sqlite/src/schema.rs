// Table definitions for the two externally owned sources. Hand-written:
// this application never runs migrations against either database, it only
// describes what the feeds provide.

diesel::table! {
    margin_replica_adjusted (book, pb, businessdate) {
        book -> Text,
        pb -> Text,
        margin -> Text,
        adjustment -> Text,
        gmv -> Text,
        businessdate -> Text,
    }
}

diesel::table! {
    pbactualmargin (pb, entity, date) {
        pb -> Text,
        entity -> Text,
        marginvalue -> Text,
        date -> Text,
    }
}
