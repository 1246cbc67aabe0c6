// Diesel view of the canonical schema. Kept in step with
// `crate::domain::catalog::define_schema`; the DDL itself is rendered from
// the descriptor, not from these macros.

diesel::table! {
    state (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Abbreviation"]
        abbreviation -> Text,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    #[sql_name = "roleType"]
    role_type (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Description"]
        description -> Nullable<Text>,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    #[sql_name = "paymentTierType"]
    payment_tier_type (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    #[sql_name = "deviceInfo"]
    device_info (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Name"]
        name -> Text,
        #[sql_name = "Type"]
        device_type -> Text,
        #[sql_name = "OS"]
        os -> Text,
        #[sql_name = "OSVersion"]
        os_version -> Text,
        #[sql_name = "Model"]
        model -> Text,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    location (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Address"]
        address -> Nullable<Text>,
        #[sql_name = "StreetAddress"]
        street_address -> Nullable<Text>,
        #[sql_name = "City"]
        city -> Nullable<Text>,
        #[sql_name = "PostalCode"]
        postal_code -> Nullable<Text>,
        #[sql_name = "Latitude"]
        latitude -> Nullable<Double>,
        #[sql_name = "Longitude"]
        longitude -> Nullable<Double>,
        #[sql_name = "StateId"]
        state_id -> Nullable<Integer>,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    contact (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "FullName"]
        full_name -> Text,
        #[sql_name = "FirstName"]
        first_name -> Text,
        #[sql_name = "LastName"]
        last_name -> Text,
        #[sql_name = "EmailAddress"]
        email_address -> Text,
        #[sql_name = "PhoneNumber"]
        phone_number -> Text,
        #[sql_name = "LocationId"]
        location_id -> Nullable<Integer>,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::table! {
    #[sql_name = "user"]
    users (id) {
        #[sql_name = "Id"]
        id -> Integer,
        #[sql_name = "Username"]
        username -> Text,
        #[sql_name = "Email"]
        email -> Text,
        #[sql_name = "RoleTypeId"]
        role_type_id -> Integer,
        #[sql_name = "IsActive"]
        is_active -> SmallInt,
        #[sql_name = "PaymentTierTypeId"]
        payment_tier_type_id -> Integer,
        #[sql_name = "ContactId"]
        contact_id -> Nullable<Integer>,
        #[sql_name = "DeviceId"]
        device_id -> Nullable<Integer>,
        #[sql_name = "LastLoginDateUTC"]
        last_login_date_utc -> Timestamp,
        #[sql_name = "CreateDateUTC"]
        create_date_utc -> Timestamp,
        #[sql_name = "UpdateDateUTC"]
        update_date_utc -> Nullable<Timestamp>,
        #[sql_name = "DeleteDateUTC"]
        delete_date_utc -> Nullable<Timestamp>,
        #[sql_name = "Deleted"]
        deleted -> SmallInt,
    }
}

diesel::joinable!(location -> state (state_id));
diesel::joinable!(contact -> location (location_id));
diesel::joinable!(users -> role_type (role_type_id));
diesel::joinable!(users -> payment_tier_type (payment_tier_type_id));
diesel::joinable!(users -> contact (contact_id));
diesel::joinable!(users -> device_info (device_id));

diesel::allow_tables_to_appear_in_same_query!(
    contact,
    device_info,
    location,
    payment_tier_type,
    role_type,
    state,
    users,
);
