mod report_dto;

pub use report_dto::{
    LocationDto, NewImageDto, NewReportDto, PayloadImage, PayloadImageMetadata, PayloadUserInfo,
    SubmissionMetadata, SubmissionPayload,
};
