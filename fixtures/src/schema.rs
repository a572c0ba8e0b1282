table! {
    accounts (account_number) {
        account_number -> Int4,
        user_id -> Int4,
        balance -> Numeric,
        created_at -> Timestamp,
    }
}

table! {
    transactions (account_number) {
        account_number -> Int4,
        from_account_number -> Int4,
        to_account_number -> Int4,
        amount -> Numeric,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

table! {
    users (id) {
        id -> Int4,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        password -> Text,
        role -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

allow_tables_to_appear_in_same_query!(accounts, transactions, users,);
