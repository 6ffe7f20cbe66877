//! Customer resource implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::rest::resources::{Customer, CustomerService};
//!
//! let customer = Customer {
//!     first_name: Some("Steve".to_string()),
//!     email: Some("steve.lastnameson@example.com".to_string()),
//!     ..Default::default()
//! };
//! let saved = shop.customers().create(&customer).await?;
//! println!("{:?} has spent {:?}", saved.email, saved.total_spent);
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::clients::Transport;
use crate::rest::{ResourceClient, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource};

use super::common::{CountOptions, GetOptions, ListOptions};

/// The state of a customer's account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomerState {
    /// No account was created for the customer.
    #[default]
    Disabled,
    /// An invite to create an account was sent.
    Invited,
    /// The customer accepted the invite and has an account.
    Enabled,
    /// The customer declined the invite.
    Declined,
}

/// A mailing address of a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CustomerAddress {
    /// The unique identifier of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the owning customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The two-letter province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// The two-letter country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The full name, built from first and last name.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// Whether this is the customer's default address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// A customer of the store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Customer {
    /// The unique identifier of the customer, assigned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The unique email address of the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The unique phone number in E.164 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the email address was verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,

    /// The state of the customer's account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CustomerState>,

    /// A note about the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// A comma-separated list of tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// Whether the customer is exempt from taxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,

    /// The three-letter code of the customer's currency.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub currency: Option<String>,

    /// The number of orders the customer has placed.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub orders_count: Option<u64>,

    /// The total amount the customer has spent.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub total_spent: Option<Decimal>,

    /// The ID of the customer's last order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub last_order_id: Option<u64>,

    /// The name of the customer's last order.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub last_order_name: Option<String>,

    /// The customer's addresses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<CustomerAddress>>,

    /// The customer's default address.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub default_address: Option<CustomerAddress>,

    /// Sets the account password on create. Never returned.
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub password: Option<String>,

    /// Must match `password`. Never returned.
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub password_confirmation: Option<String>,

    /// Whether to email an account invite on create. Never returned.
    #[serde(skip_serializing_if = "Option::is_none", skip_deserializing)]
    pub send_email_invite: Option<bool>,

    /// When the customer was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the customer was last updated.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The GraphQL Admin API ID.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl RestResource for Customer {
    const NAME: &'static str = "Customer";
    const PLURAL: &'static str = "customers";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "admin/customers/{id}.json"),
        ResourcePath::new(ResourceOperation::All, &[], "admin/customers.json"),
        ResourcePath::new(ResourceOperation::Count, &[], "admin/customers/count.json"),
        ResourcePath::new(ResourceOperation::Create, &[], "admin/customers.json"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "admin/customers/{id}.json"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "admin/customers/{id}.json"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

/// Operations on customers.
#[allow(async_fn_in_trait)]
pub trait CustomerService {
    /// Lists customers.
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, ResourceError>;

    /// Lists one page of customers with its pagination cursors.
    async fn list_page(&self, options: Option<&ListOptions>)
        -> Result<ResourceResponse<Vec<Customer>>, ResourceError>;

    /// Counts customers.
    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError>;

    /// Fetches a customer.
    async fn get(&self, customer_id: u64, options: Option<&GetOptions>) -> Result<Customer, ResourceError>;

    /// Creates a customer.
    async fn create(&self, customer: &Customer) -> Result<Customer, ResourceError>;

    /// Updates a customer.
    async fn update(&self, customer: &Customer) -> Result<Customer, ResourceError>;

    /// Deletes a customer. Customers with orders cannot be deleted.
    async fn delete(&self, customer_id: u64) -> Result<(), ResourceError>;
}

/// [`CustomerService`] over any [`Transport`].
#[derive(Debug)]
pub struct Customers<'c, T> {
    resource: ResourceClient<'c, T, Customer>,
}

impl<'c, T: Transport> Customers<'c, T> {
    /// Creates the service over `transport`.
    #[must_use]
    pub const fn new(transport: &'c T) -> Self {
        Self {
            resource: ResourceClient::new(transport),
        }
    }
}

impl<T: Transport> CustomerService for Customers<'_, T> {
    async fn list(&self, options: Option<&ListOptions>) -> Result<Vec<Customer>, ResourceError> {
        self.resource.list(&[], options).await
    }

    async fn list_page(
        &self,
        options: Option<&ListOptions>,
    ) -> Result<ResourceResponse<Vec<Customer>>, ResourceError> {
        self.resource.list_page(&[], options).await
    }

    async fn count(&self, options: Option<&CountOptions>) -> Result<u64, ResourceError> {
        self.resource.count(&[], options).await
    }

    async fn get(&self, customer_id: u64, options: Option<&GetOptions>) -> Result<Customer, ResourceError> {
        self.resource.get(&[], customer_id, options).await
    }

    async fn create(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        self.resource.create(&[], customer).await
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, ResourceError> {
        self.resource.update(&[], customer).await
    }

    async fn delete(&self, customer_id: u64) -> Result<(), ResourceError> {
        self.resource.delete(&[], customer_id).await
    }
}
