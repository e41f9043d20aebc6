use api_client::NetworkAdapter;
use api_client::RequestOptions;
use api_client::ServiceRoute;
use async_trait::async_trait;
use shared_models::BookingEnquiryData;

use crate::booking::errors::BookingError;
use crate::booking::models::HotelTerms;
use crate::booking::ports::HotelCatalog;

/// Hotel catalogue backed by the hotels service booking enquiry endpoint.
#[derive(Clone)]
pub struct HttpHotelCatalog {
    adapter: NetworkAdapter,
}

impl HttpHotelCatalog {
    pub fn new(adapter: NetworkAdapter) -> Self {
        Self { adapter }
    }
}

impl From<BookingEnquiryData> for HotelTerms {
    fn from(enquiry: BookingEnquiryData) -> Self {
        Self {
            hotel_name: enquiry.name,
            nightly_rate: enquiry.current_night_rate,
            max_guests: enquiry.max_guests_allowed,
            max_rooms_per_guest: enquiry.max_rooms_allowed_per_guest,
        }
    }
}

#[async_trait]
impl HotelCatalog for HttpHotelCatalog {
    async fn booking_terms(&self, hotel_code: i32) -> Result<HotelTerms, BookingError> {
        let endpoint = format!("/hotel/{}/booking/enquiry", hotel_code);
        let response = self
            .adapter
            .get::<BookingEnquiryData>(
                &endpoint,
                RequestOptions::default().service(ServiceRoute::Hotels),
            )
            .await;

        match (response.status_code, response.data) {
            (_, Some(enquiry)) if response.is_success => Ok(HotelTerms::from(enquiry)),
            (Some(404), _) => Err(BookingError::HotelNotFound(hotel_code)),
            (status, _) => {
                tracing::warn!(
                    hotel_code,
                    status = ?status,
                    error_code = ?response.error_code,
                    message = %response.message,
                    "Booking enquiry failed"
                );
                Err(BookingError::HotelServiceUnavailable(response.message))
            }
        }
    }
}
